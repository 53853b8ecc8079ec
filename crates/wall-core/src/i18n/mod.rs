//! UI strings for the supported locales.
//!
//! Dictionaries are nested maps addressed by dotted keys
//! (`errors.siteNotFound`). Lookups that do not land on a string return the
//! key itself.

mod dictionaries;

use std::sync::OnceLock;

use serde_json::Value;

pub const SUPPORTED_LOCALES: &[&str] = &["fr", "en"];
pub const DEFAULT_LOCALE: &str = "fr";

/// Lowercases and trims `value`; `None` unless it names a supported locale.
pub fn normalize_locale(value: &str) -> Option<&'static str> {
    let lowered = value.trim().to_lowercase();
    SUPPORTED_LOCALES.iter().copied().find(|l| *l == lowered)
}

/// The other supported locale, used by the language toggle.
pub fn next_locale(locale: &str) -> &'static str {
    if normalize_locale(locale) == Some("fr") {
        "en"
    } else {
        "fr"
    }
}

fn dictionary(locale: &str) -> &'static Value {
    static FR: OnceLock<Value> = OnceLock::new();
    static EN: OnceLock<Value> = OnceLock::new();
    match normalize_locale(locale).unwrap_or(DEFAULT_LOCALE) {
        "en" => EN.get_or_init(dictionaries::en),
        _ => FR.get_or_init(dictionaries::fr),
    }
}

/// Resolves `key` in `locale` and substitutes `{token}` placeholders from `vars`.
///
/// Unknown placeholders are left as written. Unknown locales use the default
/// dictionary.
pub fn translate(locale: &str, key: &str, vars: &[(&str, &str)]) -> String {
    let resolved = key
        .split('.')
        .try_fold(dictionary(locale), |node, part| node.get(part));
    match resolved.and_then(Value::as_str) {
        Some(template) => substitute(template, vars),
        None => key.to_string(),
    }
}

fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let token_len = after
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let token = &after[..token_len];
        if token_len > 0 && after[token_len..].starts_with('}') {
            match vars.iter().find(|(name, _)| *name == token) {
                Some((_, value)) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(token);
                    out.push('}');
                }
            }
            rest = &after[token_len + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_locales() {
        assert_eq!(normalize_locale(" EN "), Some("en"));
        assert_eq!(normalize_locale("fr"), Some("fr"));
        assert_eq!(normalize_locale("de"), None);
        assert_eq!(next_locale("fr"), "en");
        assert_eq!(next_locale("en"), "fr");
    }

    #[test]
    fn resolves_nested_keys() {
        assert_eq!(translate("en", "errors.siteNotFound", &[]), "Website not found.");
        assert_eq!(translate("fr", "errors.folderNotFound", &[]), "Dossier introuvable.");
        assert_eq!(translate("en", "language.name.fr", &[]), "French");
    }

    #[test]
    fn unknown_locale_uses_default() {
        assert_eq!(translate("de", "app.homeTitle", &[]), "Accueil");
    }

    #[test]
    fn unresolved_key_is_returned() {
        assert_eq!(translate("en", "errors.nope", &[]), "errors.nope");
        assert_eq!(translate("en", "errors", &[]), "errors");
        assert_eq!(translate("en", "errors.siteNotFound.deeper", &[]), "errors.siteNotFound.deeper");
    }

    #[test]
    fn substitutes_placeholders() {
        assert_eq!(
            translate("en", "language.switch", &[("language", "French")]),
            "Switch to French"
        );
        assert_eq!(translate("en", "language.switch", &[]), "Switch to {language}");
        assert_eq!(substitute("a {x} {y} {", &[("x", "1")]), "a 1 {y} {");
        assert_eq!(substitute("{not closed", &[]), "{not closed");
    }
}
