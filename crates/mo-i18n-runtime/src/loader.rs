use std::fs;
use std::path::Path;

use mo_i18n_core::{CoreError, MAX_CATALOG_LEN, MIN_CATALOG_LEN, MoCatalog};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};

pub fn load_catalog(path: &Path) -> RuntimeResult<MoCatalog> {
    let bytes = read_catalog_bytes(path)?;
    Ok(MoCatalog::decode(bytes)?)
}

pub fn load_catalog_verified(path: &Path, expected: &str) -> RuntimeResult<MoCatalog> {
    let expected = parse_sha256(expected)?;
    let bytes = read_catalog_bytes(path)?;
    if sha256(&bytes) != expected {
        return Err(RuntimeError::HashMismatch(path.to_path_buf()));
    }
    Ok(MoCatalog::decode(bytes)?)
}

fn read_catalog_bytes(path: &Path) -> RuntimeResult<Vec<u8>> {
    let len = fs::metadata(path)?.len();
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    if len < MIN_CATALOG_LEN {
        return Err(CoreError::CatalogTooSmall(len).into());
    }
    if len > MAX_CATALOG_LEN {
        return Err(CoreError::CatalogTooLarge(len).into());
    }
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "read catalog");
    Ok(bytes)
}

pub fn parse_sha256(value: &str) -> RuntimeResult<[u8; 32]> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix("sha256:").unwrap_or(trimmed);
    let bytes = hex::decode(hex).map_err(|_| RuntimeError::InvalidHash)?;
    bytes.try_into().map_err(|_| RuntimeError::InvalidHash)
}

pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("sha256:{}", hex::encode(sha256(bytes)))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mo_i18n_core::CoreError;

    use super::{load_catalog, load_catalog_verified, parse_sha256, sha256_hex};
    use crate::error::RuntimeError;
    use crate::test_support::{build_catalog, temp_dir};

    #[test]
    fn parses_prefixed_hash() {
        let bytes =
            parse_sha256("sha256:000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
                .expect("hash");
        assert_eq!(bytes[1], 1);
        assert!(matches!(parse_sha256("sha256:abcd"), Err(RuntimeError::InvalidHash)));
        assert!(matches!(parse_sha256("zz"), Err(RuntimeError::InvalidHash)));
    }

    #[test]
    fn loads_catalog_from_disk() {
        let dir = temp_dir("loader");
        let path = dir.join("cs.mo");
        fs::write(&path, build_catalog(&[("Exit", "Konec")])).expect("write");
        let catalog = load_catalog(&path).expect("catalog");
        assert_eq!(catalog.lookup(b"Exit"), Some(b"Konec".as_slice()));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_tiny_file_before_decoding() {
        let dir = temp_dir("loader_tiny");
        let path = dir.join("tiny.mo");
        fs::write(&path, [0u8; 8]).expect("write");
        let err = load_catalog(&path).expect_err("too small");
        assert!(matches!(err, RuntimeError::Catalog(CoreError::CatalogTooSmall(8))));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn verifies_digest() {
        let dir = temp_dir("loader_digest");
        let path = dir.join("de.mo");
        let bytes = build_catalog(&[("Exit", "Beenden")]);
        fs::write(&path, &bytes).expect("write");

        let digest = sha256_hex(&bytes);
        load_catalog_verified(&path, &digest).expect("matching digest");

        let other = sha256_hex(b"other");
        let err = load_catalog_verified(&path, &other).expect_err("mismatch");
        assert!(matches!(err, RuntimeError::HashMismatch(_)));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = temp_dir("loader_missing");
        let err = load_catalog(&dir.join("absent.mo")).expect_err("missing");
        assert!(matches!(err, RuntimeError::Io(_)));
        fs::remove_dir_all(&dir).ok();
    }
}
