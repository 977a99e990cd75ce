use std::path::{Path, PathBuf};

use mo_i18n_core::{normalize_language_id, strip_language_specifiers};
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::translator::Translator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCatalog {
    pub language: String,
    pub path: PathBuf,
}

pub fn candidate_languages(config: &RuntimeConfig, preferred: &[String]) -> Vec<String> {
    let requested = if config.languages.is_empty() {
        preferred
    } else {
        config.languages.as_slice()
    };
    let mut candidates: Vec<String> = Vec::new();
    let mut push = |id: &str| {
        if !id.is_empty() && !candidates.iter().any(|existing| existing == id) {
            candidates.push(id.to_string());
        }
    };
    for raw in requested {
        let id = normalize_language_id(raw);
        push(&id);
        push(strip_language_specifiers(&id));
    }
    if let Some(fallback) = &config.fallback_language {
        push(&normalize_language_id(fallback));
    }
    candidates
}

pub fn catalog_dir(config: &RuntimeConfig, base_dir: &Path) -> PathBuf {
    let dir = PathBuf::from(&config.catalog_dir);
    if dir.is_absolute() {
        dir
    } else {
        base_dir.join(dir)
    }
}

pub fn resolve_catalog(
    config: &RuntimeConfig,
    base_dir: &Path,
    preferred: &[String],
) -> Option<ResolvedCatalog> {
    let dir = catalog_dir(config, base_dir);
    candidate_languages(config, preferred)
        .into_iter()
        .find_map(|language| {
            let path = dir.join(format!("{language}.{}", config.extension));
            if path.is_file() {
                Some(ResolvedCatalog { language, path })
            } else {
                debug!(path = %path.display(), "no catalog");
                None
            }
        })
}

impl Translator {
    pub fn load_preferred(
        &self,
        config: &RuntimeConfig,
        base_dir: &Path,
        preferred: &[String],
    ) -> RuntimeResult<String> {
        let Some(resolved) = resolve_catalog(config, base_dir, preferred) else {
            let tried = candidate_languages(config, preferred).join(", ");
            return Err(RuntimeError::NoCatalog(tried));
        };
        match config.checksums.get(&resolved.language) {
            Some(expected) => self.load_file_verified(&resolved.path, expected)?,
            None => self.load_file(&resolved.path)?,
        }
        Ok(resolved.language)
    }
}
