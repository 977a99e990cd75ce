use std::fmt::Write as _;

use mo_i18n_core::{language_name, supported_languages};

use crate::error::CliError;

#[derive(Debug, Clone, Default)]
pub struct LanguagesOptions {
    pub name_of: Option<String>,
}

pub fn run_languages(options: &LanguagesOptions) -> Result<String, CliError> {
    if let Some(id) = &options.name_of {
        let name = language_name(id).ok_or_else(|| CliError::UnknownLanguage(id.clone()))?;
        return Ok(format!("{name}\n"));
    }
    let mut out = String::new();
    for info in supported_languages() {
        let _ = writeln!(out, "{}\t{}", info.code, info.name);
    }
    Ok(out)
}
