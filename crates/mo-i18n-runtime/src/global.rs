use std::sync::OnceLock;

use mo_i18n_core::FormatArg;

use crate::translator::Translator;

static CURRENT: OnceLock<Translator> = OnceLock::new();

pub fn current() -> &'static Translator {
    CURRENT.get_or_init(Translator::new)
}

pub fn tr(key: &str) -> String {
    current().translate(key)
}

pub fn trn(singular: &str, plural: &str, n: i64) -> String {
    current().translate_plural(singular, plural, n)
}

pub fn trf(key: &str, args: &[FormatArg<'_>]) -> String {
    current().format(key, args)
}

pub fn trfn(singular: &str, plural: &str, n: i64, args: &[FormatArg<'_>]) -> String {
    current().format_plural(singular, plural, n, args)
}

pub fn unload() {
    current().unload();
}
