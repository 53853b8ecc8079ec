//! Shortcut records: websites and network folders.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Site,
    Folder,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Site => "site",
            RecordKind::Folder => "folder",
        }
    }

    /// Filename stem used when a record name sanitizes to nothing.
    pub fn fallback_label(self) -> &'static str {
        match self {
            RecordKind::Site => "site",
            RecordKind::Folder => "dossier",
        }
    }

    /// Data file holding this collection.
    pub fn data_file(self) -> &'static str {
        match self {
            RecordKind::Site => "shortcuts.json",
            RecordKind::Folder => "folders.json",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted shortcut entry.
///
/// `target` is an absolute URL for sites and a UNC, drive or `file://` path
/// for folders. Timestamps are kept as the RFC 3339 strings found on disk so
/// that hand-edited or legacy values survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub kind: RecordKind,
    pub name: String,
    pub target: String,
    pub description: String,
    pub image_url: String,
    /// Explicit alphabetical sort key; `name` is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Fields supplied when creating a record.
#[derive(Debug, Clone, Default)]
pub struct NewRecord {
    pub name: String,
    pub target: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update. `None` keeps the current value; blank `name`/`target`
/// are ignored, while a provided description or image replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub target: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Record {
    /// Builds a fresh record with a new id and creation timestamp.
    /// Callers are expected to have rejected blank name/target already.
    pub fn create(kind: RecordKind, new: NewRecord) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            name: new.name.trim().to_string(),
            target: new.target.trim().to_string(),
            description: new.description.as_deref().map(str::trim).unwrap_or_default().to_string(),
            image_url: new.image_url.as_deref().map(str::trim).unwrap_or_default().to_string(),
            sort_name: None,
            created_at: now_timestamp(),
            updated_at: None,
        }
    }

    /// Applies `patch` in place and refreshes `updated_at`.
    ///
    /// Returns the previous image URL when the image changed, so the caller
    /// can release the old asset.
    pub fn apply(&mut self, patch: RecordPatch) -> Option<String> {
        if let Some(name) = non_blank(patch.name) {
            self.name = name;
        }
        if let Some(target) = non_blank(patch.target) {
            self.target = target;
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        let mut replaced = None;
        if let Some(image) = patch.image_url {
            let image = image.trim().to_string();
            if image != self.image_url {
                replaced = Some(std::mem::replace(&mut self.image_url, image));
            }
        }
        self.updated_at = Some(now_timestamp());
        replaced
    }

    /// Key used by alphabetical ordering.
    pub fn display_key(&self) -> &str {
        self.sort_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }

    /// Parsed creation time. Accepts RFC 3339 as well as ISO-8601 date-times
    /// without an offset and bare dates, both read as UTC.
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(t.and_utc());
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(t.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
