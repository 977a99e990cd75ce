use std::path::PathBuf;

use mo_i18n_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] CoreError),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid hash format")]
    InvalidHash,
    #[error("catalog hash mismatch: {}", .0.display())]
    HashMismatch(PathBuf),
    #[error("no catalog found for languages: {0}")]
    NoCatalog(String),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
