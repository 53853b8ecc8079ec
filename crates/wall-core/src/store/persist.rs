//! JSON data files: one array per collection, pretty-printed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::record::{Record, RecordKind};

/// On-disk shape. Sites carry `targetUrl`, folders `networkPath`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    network_path: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort_name: Option<String>,
    #[serde(default)]
    created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

impl StoredRecord {
    fn into_record(self, kind: RecordKind) -> Record {
        let target = match kind {
            RecordKind::Site => self.target_url.or(self.network_path),
            RecordKind::Folder => self.network_path.or(self.target_url),
        };
        Record {
            id: self.id,
            kind,
            name: self.name,
            target: target.unwrap_or_default(),
            description: self.description,
            image_url: self.image_url,
            sort_name: self.sort_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn from_record(record: &Record) -> Self {
        let (target_url, network_path) = match record.kind {
            RecordKind::Site => (Some(record.target.clone()), None),
            RecordKind::Folder => (None, Some(record.target.clone())),
        };
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            target_url,
            network_path,
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            sort_name: record.sort_name.clone(),
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        }
    }
}

/// Reads a collection. A missing file is created as an empty array.
pub(super) async fn read_records(path: &Path, kind: RecordKind) -> StoreResult<Vec<Record>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            write_records(path, &[]).await?;
            return Ok(Vec::new());
        }
        Err(e) => return Err(StoreError::io("read", path, e)),
    };
    let stored: Vec<StoredRecord> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(stored.into_iter().map(|s| s.into_record(kind)).collect())
}

/// Writes a collection via a sibling temp file and rename.
pub(super) async fn write_records(path: &Path, records: &[Record]) -> StoreResult<()> {
    let stored: Vec<StoredRecord> = records.iter().map(StoredRecord::from_record).collect();
    let json = serde_json::to_vec_pretty(&stored).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json)
        .await
        .map_err(|e| StoreError::io("write", &tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| StoreError::io("rename", path, e))?;
    Ok(())
}
