//! Download filename sanitization.
//!
//! Names are cleaned against the Windows reserved set regardless of the host
//! OS, since the `.url` file is opened on the visitor's machine.

use unicode_normalization::UnicodeNormalization;

/// Extension appended to every shortcut download.
pub const SHORTCUT_EXTENSION: &str = ".url";

/// Sanitizes a display name into a filename stem.
///
/// - NFKC-normalizes and trims
/// - Replaces `< > : " / \ | ? *` and U+0000..=U+001F with `_`
/// - Collapses whitespace runs to a single space
/// - Strips trailing dots
///
/// May return an empty string; see [`build_filename`] for the fallback.
pub fn sanitize_name(name: &str) -> String {
    let normalized: String = name.nfkc().collect();

    let mut out = String::with_capacity(normalized.len());
    let mut in_whitespace = false;

    for c in normalized.trim_matches(is_space).chars() {
        let replacement = if is_reserved(c) { '_' } else { c };

        if is_space(replacement) {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(replacement);
            in_whitespace = false;
        }
    }

    out.trim_end_matches('.').to_string()
}

/// Builds the `<stem>.url` filename for a record name.
///
/// Falls back to `fallback` when the name sanitizes to nothing, then turns
/// every run of whitespace or apostrophes into a single `_`.
pub fn build_filename(name: &str, fallback: &str) -> String {
    let sanitized = sanitize_name(name);
    let base = if sanitized.is_empty() {
        fallback
    } else {
        sanitized.as_str()
    };

    let mut out = String::with_capacity(base.len() + SHORTCUT_EXTENSION.len());
    let mut prev_joined = false;
    for c in base.chars() {
        if is_space(c) || c == '\'' {
            if !prev_joined {
                out.push('_');
            }
            prev_joined = true;
        } else {
            out.push(c);
            prev_joined = false;
        }
    }
    out.push_str(SHORTCUT_EXTENSION);
    out
}

/// Unicode whitespace plus U+FEFF (zero-width no-break space).
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_reserved(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || ('\0'..='\u{1f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_reserved_characters() {
        assert_eq!(sanitize_name("a<b>c:d\"e/f\\g|h?i*j"), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn control_chars_become_underscores() {
        assert_eq!(sanitize_name("tab\there"), "tab_here");
        assert_eq!(sanitize_name("nul\x00byte"), "nul_byte");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(sanitize_name("  My    Site  "), "My Site");
        assert_eq!(sanitize_name("a\u{3000}\u{3000}b"), "a b");
    }

    #[test]
    fn strips_trailing_dots() {
        assert_eq!(sanitize_name("report..."), "report");
        assert_eq!(sanitize_name("..."), "");
    }

    #[test]
    fn nfkc_folds_compatibility_forms() {
        assert_eq!(sanitize_name("ＡＢＣ"), "ABC");
        assert_eq!(sanitize_name("ﬁle"), "file");
    }

    #[test]
    fn filename_two_stage_rule() {
        assert_eq!(build_filename("My: Site?", "site"), "My__Site_.url");
        assert_eq!(build_filename("L'intranet RH", "site"), "L_intranet_RH.url");
        assert_eq!(build_filename("it'' s", "site"), "it_s.url");
    }

    #[test]
    fn filename_falls_back_when_empty() {
        assert_eq!(build_filename("", "site"), "site.url");
        assert_eq!(build_filename("  ...  ", "dossier"), "dossier.url");
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(sanitize_name("\u{feff}"), "");
        assert_eq!(sanitize_name("\u{feff} Wiki \u{feff}"), "Wiki");
        assert_eq!(build_filename("\u{feff}", "site"), "site.url");
        assert_eq!(build_filename("Mon\u{feff}Wiki", "site"), "Mon_Wiki.url");
    }

    #[test]
    fn filename_keeps_non_ascii() {
        assert_eq!(build_filename("Café Société", "site"), "Café_Société.url");
    }
}
