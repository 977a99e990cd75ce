#![forbid(unsafe_code)]

mod config;
mod error;
mod global;
mod loader;
mod preferred;
mod resolve;
mod translator;

#[cfg(test)]
mod test_support;

pub use config::{RuntimeConfig, load_config, load_config_or_default};
pub use error::{RuntimeError, RuntimeResult};
pub use global::{current, tr, trf, trfn, trn, unload};
pub use loader::{load_catalog, load_catalog_verified, parse_sha256, sha256, sha256_hex};
pub use preferred::{preferred_languages, preferred_languages_from};
pub use resolve::{ResolvedCatalog, candidate_languages, catalog_dir, resolve_catalog};
pub use translator::Translator;
