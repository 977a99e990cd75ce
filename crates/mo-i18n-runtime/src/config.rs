use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RuntimeResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub catalog_dir: String,
    pub extension: String,
    pub languages: Vec<String>,
    pub fallback_language: Option<String>,
    pub checksums: BTreeMap<String, String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            catalog_dir: "i18n".to_string(),
            extension: "mo".to_string(),
            languages: Vec::new(),
            fallback_language: None,
            checksums: BTreeMap::new(),
        }
    }
}

pub fn load_config(path: &Path) -> RuntimeResult<RuntimeConfig> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> RuntimeResult<RuntimeConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(RuntimeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{RuntimeConfig, load_config, load_config_or_default};
    use crate::error::RuntimeError;
    use crate::test_support::temp_dir;

    #[test]
    fn uses_default_when_missing() {
        let dir = temp_dir("config_missing");
        let config = load_config_or_default(&dir.join("mo-i18n.toml")).expect("config");
        assert_eq!(config.catalog_dir, "i18n");
        assert_eq!(config.extension, "mo");
        assert!(config.languages.is_empty());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn loads_from_file() {
        let dir = temp_dir("config");
        let path = dir.join("mo-i18n.toml");
        let contents = r#"
catalog_dir = "Content/Translations"
languages = ["pt-BR"]
fallback_language = "en"

[checksums]
pt = "sha256:00"
"#;
        fs::write(&path, contents).expect("write");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.catalog_dir, "Content/Translations");
        assert_eq!(config.extension, "mo");
        assert_eq!(config.languages, ["pt-BR"]);
        assert_eq!(config.fallback_language.as_deref(), Some("en"));
        assert_eq!(config.checksums.get("pt").map(String::as_str), Some("sha256:00"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = temp_dir("config_bad");
        let path = dir.join("mo-i18n.toml");
        fs::write(&path, "languages = [").expect("write");
        let err = load_config(&path).expect_err("bad toml");
        assert!(matches!(err, RuntimeError::Toml(_)));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn default_values_are_stable() {
        let config = RuntimeConfig::default();
        assert_eq!(config.fallback_language, None);
        assert!(config.checksums.is_empty());
    }
}
