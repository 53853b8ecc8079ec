//! Content-Disposition header for shortcut downloads (filename and filename*).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 5987 `attr-char`: everything outside it is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Formats an `attachment` disposition carrying both an ASCII `filename`
/// and an RFC 5987 `filename*=UTF-8''...` parameter.
///
/// The quoted label never contains a raw `"` (rewritten to `'`), a bare
/// backslash, or non-ASCII bytes, so the header value is always valid ASCII.
pub fn format_attachment(filename: &str) -> String {
    let label = ascii_label(filename);
    let encoded = utf8_percent_encode(filename, ATTR_CHAR);
    format!("attachment; filename=\"{label}\"; filename*=UTF-8''{encoded}")
}

fn ascii_label(filename: &str) -> String {
    let mut out = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' => out.push('\''),
            '\\' => out.push_str("\\\\"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            _ => out.push('_'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    /// Extracts the filename from a raw Content-Disposition header value.
    ///
    /// Supports quoted `filename="value"`, token `filename=value` and
    /// `filename*=UTF-8''percent-encoded`. `filename*` takes precedence.
    fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
        let mut filename_from_token: Option<String> = None;

        for param in header_value.trim().split(';') {
            let Some((name, v)) = param.trim().split_once('=') else {
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            let v = v.trim();

            if name == "filename*" {
                let rest = v.strip_prefix("utf-8''").or_else(|| v.strip_prefix("UTF-8''"));
                if let Some(rest) = rest {
                    let decoded = percent_decode_str(rest).decode_utf8_lossy();
                    if !decoded.is_empty() {
                        return Some(decoded.into_owned());
                    }
                }
            }

            if name == "filename" {
                let unquoted = if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
                    decode_quoted_filename(&v[1..v.len() - 1])
                } else {
                    v.to_string()
                };
                if !unquoted.is_empty() {
                    filename_from_token = Some(unquoted);
                }
            }
        }

        filename_from_token
    }

    /// Decode backslash escapes in a quoted filename value.
    fn decode_quoted_filename(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next_if(|n| *n == '"' || *n == '\\') {
                    out.push(next);
                    continue;
                }
            }
            out.push(c);
        }
        out
    }

    #[test]
    fn ascii_name() {
        assert_eq!(
            format_attachment("Intranet.url"),
            "attachment; filename=\"Intranet.url\"; filename*=UTF-8''Intranet.url"
        );
    }

    #[test]
    fn non_ascii_name_gets_encoded_fallback() {
        let header = format_attachment("Café_Société.url");
        assert_eq!(
            header,
            "attachment; filename=\"Caf__Soci_t_.url\"; filename*=UTF-8''Caf%C3%A9_Soci%C3%A9t%C3%A9.url"
        );
        assert!(header.is_ascii());
    }

    #[test]
    fn quotes_cannot_break_the_header() {
        let header = format_attachment("a\"b'c.url");
        assert!(header.starts_with("attachment; filename=\"a'b'c.url\";"));
        assert!(header.ends_with("filename*=UTF-8''a%22b%27c.url"));
    }

    #[test]
    fn parse_prefers_filename_star() {
        let r = parse_content_disposition_filename(
            "attachment; filename=\"fallback.url\"; filename*=UTF-8''real%20name.url",
        );
        assert_eq!(r.as_deref(), Some("real name.url"));
    }

    #[test]
    fn parse_quoted_and_token() {
        assert_eq!(
            parse_content_disposition_filename("attachment; filename=\"a\\\\b.url\"").as_deref(),
            Some("a\\b.url")
        );
        assert_eq!(
            parse_content_disposition_filename("attachment; filename=plain.url").as_deref(),
            Some("plain.url")
        );
    }

    #[test]
    fn formatted_header_parses_back() {
        for name in ["Café_Société.url", "日本語.url", "site.url", "O'Neil.url"] {
            let header = format_attachment(name);
            assert_eq!(
                parse_content_disposition_filename(&header).as_deref(),
                Some(name)
            );
        }
    }
}
