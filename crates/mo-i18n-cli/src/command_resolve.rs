use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use mo_i18n_runtime::{
    candidate_languages, load_config_or_default, preferred_languages, resolve_catalog,
};

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub config_path: PathBuf,
    pub languages: Vec<String>,
}

pub fn run_resolve(options: &ResolveOptions) -> Result<String, CliError> {
    let config = load_config_or_default(&options.config_path)?;
    let base_dir = options
        .config_path
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let preferred = if options.languages.is_empty() {
        preferred_languages()
    } else {
        options.languages.clone()
    };

    let mut out = String::new();
    let candidates = candidate_languages(&config, &preferred);
    let _ = writeln!(out, "candidates: {}", candidates.join(", "));
    match resolve_catalog(&config, base_dir, &preferred) {
        Some(resolved) => {
            let verified = if config.checksums.contains_key(&resolved.language) {
                " (checksum configured)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "catalog: {} [{}]{verified}",
                resolved.path.display(),
                resolved.language
            );
        }
        None => {
            let _ = writeln!(out, "catalog: none");
        }
    }
    Ok(out)
}
