use std::fmt::Write as _;
use std::path::PathBuf;

use mo_i18n_runtime::load_catalog;

use crate::error::CliError;
use crate::text::escape_bytes;

#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub catalog_path: PathBuf,
}

pub fn run_dump(options: &DumpOptions) -> Result<String, CliError> {
    let catalog = load_catalog(&options.catalog_path)?;
    let mut out = String::new();
    for (original, translation) in catalog.entries() {
        let _ = writeln!(
            out,
            "{}\t{}",
            escape_bytes(original),
            escape_bytes(translation)
        );
    }
    Ok(out)
}
