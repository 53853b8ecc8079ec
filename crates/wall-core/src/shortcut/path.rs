//! Canonical target form for folder shortcuts.

/// Normalizes a free-form path or URL into the target embedded in a `.url` file.
///
/// UNC paths (`\\server\share`, `//server/share`) and drive-letter paths
/// (`C:\dir`, `C:/dir`) are rewritten to backslash form with any run of
/// separators collapsed to exactly two backslashes. `file://` URLs and
/// everything else pass through trimmed. Never fails, and is idempotent.
pub fn normalize_target(input: &str) -> String {
    let target = input.trim();
    if target.is_empty() {
        return String::new();
    }
    if target.starts_with("file://") {
        return target.to_string();
    }
    if is_unc_like(target) || has_drive_prefix(target) {
        return to_dos_path(target);
    }
    target.to_string()
}

fn is_unc_like(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('\\' | '/'), Some('\\' | '/'))
    )
}

fn has_drive_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && (b[2] == b'/' || b[2] == b'\\')
}

/// Forward slashes become backslashes; runs of 2+ backslashes collapse to two.
fn to_dos_path(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = 0usize;
    for c in s.chars() {
        let c = if c == '/' { '\\' } else { c };
        if c == '\\' {
            run += 1;
            continue;
        }
        flush_separators(&mut out, run);
        run = 0;
        out.push(c);
    }
    flush_separators(&mut out, run);
    out
}

fn flush_separators(out: &mut String, run: usize) {
    match run {
        0 => {}
        1 => out.push('\\'),
        _ => out.push_str("\\\\"),
    }
}
