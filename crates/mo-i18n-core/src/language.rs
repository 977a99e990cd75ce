use alloc::string::String;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> LanguageInfo {
    LanguageInfo { code, name }
}

pub static SUPPORTED_LANGUAGES: [LanguageInfo; 29] = [
    lang("af", "Afrikaans"),
    lang("be", "БЕЛАРУСКАЯ"),
    lang("bg", "БЪЛГАРСКИ"),
    lang("cs", "Čeština"),
    lang("da", "Dansk"),
    lang("de", "Deutsch"),
    lang("en", "English"),
    lang("es", "Español"),
    lang("et", "Eesti"),
    lang("fi", "Suomi"),
    lang("fr", "Français"),
    lang("hr", "Hrvatski"),
    lang("hu", "Magyar"),
    lang("it", "Italiano"),
    lang("lt", "Lietuvių"),
    lang("lv", "Latviešu"),
    lang("mo", "ЛИМБА МОЛДОВЕНЯСКЭ"),
    lang("nl", "Nederlands"),
    lang("no", "Norsk"),
    lang("pl", "Polski"),
    lang("pt", "Português"),
    lang("ro", "Română"),
    lang("ru", "РУССКИЙ"),
    lang("sk", "Slovenčina"),
    lang("sl", "Slovenščina"),
    lang("sr", "Srpski"),
    lang("sv", "Svenska"),
    lang("tr", "Türkçe"),
    lang("uk", "УКРАЇНСЬКА"),
];

pub fn supported_languages() -> &'static [LanguageInfo] {
    &SUPPORTED_LANGUAGES
}

pub fn strip_language_specifiers(id: &str) -> &str {
    match id.find(['-', '_', '.', '@']) {
        Some(end) => &id[..end],
        None => id,
    }
}

pub fn language_name(id: &str) -> Option<&'static str> {
    let base = strip_language_specifiers(id.trim());
    if base.is_empty() {
        return None;
    }
    SUPPORTED_LANGUAGES
        .binary_search_by(|info| {
            info.code
                .bytes()
                .cmp(base.bytes().map(|byte| byte.to_ascii_lowercase()))
        })
        .ok()
        .map(|index| SUPPORTED_LANGUAGES[index].name)
}

pub fn normalize_language_id(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_suffix = match trimmed.find(['.', '@']) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    without_suffix
        .chars()
        .map(|ch| if ch == '_' { '-' } else { ch.to_ascii_lowercase() })
        .collect()
}
