//! Internet Shortcut (`.url`) file content.

use unicode_normalization::UnicodeNormalization;

/// Section header of an Internet Shortcut file.
pub const SECTION_HEADER: &str = "[InternetShortcut]";

const BOM: u16 = 0xFEFF;

/// Renders the shortcut text for `target`, before encoding.
///
/// CR and LF are stripped from the target so it cannot inject extra keys,
/// then the result is trimmed and NFC-composed.
pub fn render_payload(target: &str) -> String {
    let cleaned: String = target.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    let composed: String = cleaned.trim().nfc().collect();
    format!("{SECTION_HEADER}\r\nURL={composed}\r\n")
}

/// Builds the byte-exact file body: UTF-16LE with a leading BOM.
pub fn build_payload(target: &str) -> Vec<u8> {
    let text = render_payload(target);
    let mut bytes = Vec::with_capacity((text.len() + 1) * 2);
    for unit in std::iter::once(BOM).chain(text.encode_utf16()) {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}
