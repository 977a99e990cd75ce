use mo_i18n_core::normalize_language_id;

const LOCALE_VARIABLES: [&str; 3] = ["LANG", "LC_ALL", "LC_MESSAGES"];

pub fn preferred_languages() -> Vec<String> {
    preferred_languages_from(|name| std::env::var(name).ok())
}

pub fn preferred_languages_from<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = LOCALE_VARIABLES
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.trim().is_empty()))
    else {
        return Vec::new();
    };
    let id = normalize_language_id(&raw);
    if id.is_empty() || id == "c" || id == "posix" {
        return Vec::new();
    }
    vec![id]
}
