//! JSON-file record store for sites and folders.
//!
//! Each collection lives in its own file under the data directory. Every
//! read-modify-write of a collection holds that collection's lock, so
//! concurrent admin actions cannot lose each other's updates.

mod assets;
mod persist;

pub use assets::{is_uploaded_asset, release_asset, resolve_asset, UPLOADS_PREFIX};

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::listing::{sort_records, SortMode};
use crate::record::{NewRecord, Record, RecordKind, RecordPatch};

pub struct RecordStore {
    data_dir: PathBuf,
    uploads_dir: PathBuf,
    sites: Mutex<()>,
    folders: Mutex<()>,
}

impl RecordStore {
    /// Opens the store, creating the data and uploads directories if needed.
    pub async fn open(data_dir: impl AsRef<Path>, uploads_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let uploads_dir = uploads_dir.as_ref().to_path_buf();
        for dir in [&data_dir, &uploads_dir] {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io("create dir", dir, e))?;
        }
        tracing::debug!(data_dir = %data_dir.display(), "record store opened");
        Ok(Self {
            data_dir,
            uploads_dir,
            sites: Mutex::new(()),
            folders: Mutex::new(()),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    fn path(&self, kind: RecordKind) -> PathBuf {
        self.data_dir.join(kind.data_file())
    }

    fn lock(&self, kind: RecordKind) -> &Mutex<()> {
        match kind {
            RecordKind::Site => &self.sites,
            RecordKind::Folder => &self.folders,
        }
    }

    /// All records of `kind`. Sites come back alphabetically; folders in
    /// stored order.
    pub async fn list(&self, kind: RecordKind) -> StoreResult<Vec<Record>> {
        let _guard = self.lock(kind).lock().await;
        let mut records = persist::read_records(&self.path(kind), kind).await?;
        if kind == RecordKind::Site {
            sort_records(&mut records, SortMode::Alpha);
        }
        Ok(records)
    }

    pub async fn get(&self, kind: RecordKind, id: &str) -> StoreResult<Record> {
        let _guard = self.lock(kind).lock().await;
        persist::read_records(&self.path(kind), kind)
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(kind, id))
    }

    pub async fn create(&self, kind: RecordKind, new: NewRecord) -> StoreResult<Record> {
        if new.name.trim().is_empty() || new.target.trim().is_empty() {
            return Err(StoreError::MissingFields { kind });
        }
        if kind == RecordKind::Site && url::Url::parse(new.target.trim()).is_err() {
            tracing::warn!(target_url = new.target.trim(), "site target is not an absolute URL");
        }

        let record = Record::create(kind, new);
        let _guard = self.lock(kind).lock().await;
        let path = self.path(kind);
        let mut records = persist::read_records(&path, kind).await?;
        records.push(record.clone());
        persist::write_records(&path, &records).await?;
        tracing::info!(kind = %kind, id = %record.id, name = %record.name, "record created");
        Ok(record)
    }

    pub async fn update(&self, kind: RecordKind, id: &str, patch: RecordPatch) -> StoreResult<Record> {
        let guard = self.lock(kind).lock().await;
        let path = self.path(kind);
        let mut records = persist::read_records(&path, kind).await?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(kind, id))?;
        let replaced = record.apply(patch);
        let updated = record.clone();
        persist::write_records(&path, &records).await?;
        drop(guard);

        if let Some(previous) = replaced {
            release_asset(&self.uploads_dir, &previous).await;
        }
        tracing::info!(kind = %kind, id = %updated.id, "record updated");
        Ok(updated)
    }

    /// Removes a record and releases its uploaded image, if any.
    pub async fn delete(&self, kind: RecordKind, id: &str) -> StoreResult<Record> {
        let guard = self.lock(kind).lock().await;
        let path = self.path(kind);
        let mut records = persist::read_records(&path, kind).await?;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(kind, id))?;
        let removed = records.remove(index);
        persist::write_records(&path, &records).await?;
        drop(guard);

        release_asset(&self.uploads_dir, &removed.image_url).await;
        tracing::info!(kind = %kind, id = %removed.id, "record deleted");
        Ok(removed)
    }
}

fn not_found(kind: RecordKind, id: &str) -> StoreError {
    StoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}
