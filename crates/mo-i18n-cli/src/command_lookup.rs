use std::path::PathBuf;

use mo_i18n_runtime::Translator;

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct LookupOptions {
    pub catalog_path: PathBuf,
    pub key: String,
    pub plural: Option<(String, i64)>,
}

pub fn run_lookup(options: &LookupOptions) -> Result<String, CliError> {
    let translator = Translator::new();
    translator.load_file(&options.catalog_path)?;
    let text = match &options.plural {
        Some((plural, n)) => translator.translate_plural(&options.key, plural, *n),
        None => translator.translate(&options.key),
    };
    Ok(format!("{text}\n"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{LookupOptions, run_lookup};
    use crate::test_support::{build_catalog, temp_dir};

    #[test]
    fn looks_up_singular_and_plural() {
        let dir = temp_dir("lookup");
        let path = dir.join("de.mo");
        fs::write(
            &path,
            build_catalog(&[
                ("Exit", "Beenden"),
                ("%d file\0%d files", "%d Datei\0%d Dateien"),
            ]),
        )
        .expect("write");

        let mut options = LookupOptions {
            catalog_path: path,
            key: "Exit".to_string(),
            plural: None,
        };
        assert_eq!(run_lookup(&options).expect("lookup"), "Beenden\n");

        options.key = "%d file".to_string();
        options.plural = Some(("%d files".to_string(), 3));
        assert_eq!(run_lookup(&options).expect("lookup"), "%d Dateien\n");

        options.key = "Missing".to_string();
        options.plural = None;
        assert_eq!(run_lookup(&options).expect("lookup"), "Missing\n");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = temp_dir("lookup_missing");
        let options = LookupOptions {
            catalog_path: dir.join("none.mo"),
            key: "Exit".to_string(),
            plural: None,
        };
        assert!(run_lookup(&options).is_err());
        fs::remove_dir_all(&dir).ok();
    }
}
