use mo_i18n_core::CoreError;
use mo_i18n_runtime::RuntimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CoreError),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
