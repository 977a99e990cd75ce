use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mo_i18n_core::{FormatArg, LookupStrategy, MoCatalog, c_str, format_message};
use tracing::{debug, info, warn};

use crate::error::RuntimeResult;
use crate::loader::{load_catalog, load_catalog_verified};

/// Loading swaps the whole catalog; a failed load leaves the previous one active.
#[derive(Debug, Default)]
pub struct Translator {
    active: RwLock<Option<Arc<MoCatalog>>>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_file(&self, path: &Path) -> RuntimeResult<()> {
        let catalog = load_catalog(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "rejected catalog");
        })?;
        info!(path = %path.display(), strings = catalog.string_count(), "loaded catalog");
        self.install(catalog);
        Ok(())
    }

    pub fn load_file_verified(&self, path: &Path, expected_sha256: &str) -> RuntimeResult<()> {
        let catalog = load_catalog_verified(path, expected_sha256).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "rejected catalog");
        })?;
        info!(path = %path.display(), strings = catalog.string_count(), "loaded catalog");
        self.install(catalog);
        Ok(())
    }

    pub fn load_bytes(&self, bytes: Vec<u8>) -> RuntimeResult<()> {
        let catalog = MoCatalog::decode(bytes).inspect_err(|err| {
            warn!(error = %err, "rejected catalog");
        })?;
        self.install(catalog);
        Ok(())
    }

    pub fn install(&self, catalog: MoCatalog) {
        let rule = catalog.plural_rule();
        if rule.is_declared() {
            debug!(forms = rule.count(), expr = %rule.expr(), "catalog plural rule");
        } else if let Some(forms) = catalog.metadata().plural_forms() {
            warn!(plural_forms = forms, "unusable plural rule; using n != 1");
        } else {
            debug!("catalog declares no plural rule; using n != 1");
        }
        *self.write() = Some(Arc::new(catalog));
    }

    pub fn unload(&self) {
        if self.write().take().is_some() {
            info!("unloaded catalog");
        }
    }

    pub fn catalog(&self) -> Option<Arc<MoCatalog>> {
        self.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.read().is_some()
    }

    pub fn strategy(&self) -> Option<LookupStrategy> {
        self.read().as_ref().map(|catalog| catalog.strategy())
    }

    pub fn plural_count(&self) -> Option<u32> {
        self.read()
            .as_ref()
            .map(|catalog| catalog.plural_rule().count())
    }

    pub fn translation_description(&self) -> Option<String> {
        let catalog = self.catalog()?;
        catalog.metadata().language_team().map(String::from)
    }

    pub fn translate(&self, key: &str) -> String {
        let Some(catalog) = self.catalog() else {
            return key.to_string();
        };
        match catalog.lookup(key.as_bytes()) {
            Some(translation) => decode_text(translation),
            None => {
                debug!(key, "no translation");
                key.to_string()
            }
        }
    }

    pub fn translate_plural(&self, singular: &str, plural: &str, n: i64) -> String {
        if let Some(catalog) = self.catalog() {
            if let Some(form) = catalog.lookup_plural(singular.as_bytes(), n) {
                return decode_text(form);
            }
            debug!(key = singular, n, "no plural translation");
        }
        let fallback = if n == 1 { singular } else { plural };
        fallback.to_string()
    }

    pub fn format(&self, key: &str, args: &[FormatArg<'_>]) -> String {
        format_message(&self.translate(key), args)
    }

    pub fn format_plural(
        &self,
        singular: &str,
        plural: &str,
        n: i64,
        args: &[FormatArg<'_>],
    ) -> String {
        format_message(&self.translate_plural(singular, plural, n), args)
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<MoCatalog>>> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<MoCatalog>>> {
        self.active.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(c_str(bytes)).into_owned()
}
