//! Shortcut file generation and naming.
//!
//! Turns a record's name and target into the downloadable `.url` file:
//! canonical target, sanitized filename, UTF-16LE payload and the matching
//! attachment headers.

mod content_disposition;
mod path;
mod payload;
mod sanitize;

pub use content_disposition::format_attachment;
pub use path::normalize_target;
pub use payload::{build_payload, render_payload, SECTION_HEADER};
pub use sanitize::{build_filename, sanitize_name, SHORTCUT_EXTENSION};

use crate::record::{Record, RecordKind};

/// MIME type sent with every shortcut download.
pub const CONTENT_TYPE: &str = "application/octet-stream";

/// A fully rendered shortcut download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutFile {
    /// Filename including the `.url` extension.
    pub filename: String,
    /// UTF-16LE body with BOM.
    pub bytes: Vec<u8>,
}

impl ShortcutFile {
    /// Builds the shortcut for a persisted record.
    ///
    /// Folder targets are canonicalized first; site URLs are embedded as-is.
    pub fn for_record(record: &Record) -> Self {
        let target = match record.kind {
            RecordKind::Site => record.target.clone(),
            RecordKind::Folder => normalize_target(&record.target),
        };
        Self::new(&record.name, &target, record.kind.fallback_label())
    }

    /// Builds a shortcut from raw parts.
    pub fn new(name: &str, target: &str, fallback_label: &str) -> Self {
        Self {
            filename: build_filename(name, fallback_label),
            bytes: build_payload(target),
        }
    }

    /// Value for the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format_attachment(&self.filename)
    }

    /// Value for the `Content-Length` header.
    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NewRecord, Record};

    fn folder(name: &str, path: &str) -> Record {
        Record::create(
            RecordKind::Folder,
            NewRecord {
                name: name.into(),
                target: path.into(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn folder_target_is_canonicalized() {
        let file = ShortcutFile::for_record(&folder("Compta", "//srv/compta"));
        assert_eq!(file.filename, "Compta.url");
        assert_eq!(file.bytes, build_payload(r"\\srv\compta"));
    }

    #[test]
    fn folder_fallback_label() {
        let file = ShortcutFile::for_record(&folder("???", r"\\srv\x"));
        assert_eq!(file.filename, "___.url");
        let file = ShortcutFile::for_record(&folder("...", r"\\srv\x"));
        assert_eq!(file.filename, "dossier.url");
    }

    #[test]
    fn headers_match_body() {
        let file = ShortcutFile::new("Wiki", "https://wiki.example", "site");
        assert_eq!(file.content_length(), file.bytes.len());
        assert_eq!(
            file.content_disposition(),
            "attachment; filename=\"Wiki.url\"; filename*=UTF-8''Wiki.url"
        );
    }
}
