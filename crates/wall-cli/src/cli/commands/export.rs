//! `shortcut-wall export <site|folder> <id>`: write the `.url` file locally.

use anyhow::{Context, Result};
use std::path::Path;
use wall_core::config::WallConfig;
use wall_core::{RecordKind, ShortcutFile};

use super::open_store;

pub async fn run_export(cfg: &WallConfig, kind: RecordKind, id: &str, out_dir: &Path) -> Result<()> {
    let store = open_store(cfg).await?;
    let record = store.get(kind, id).await?;
    let file = ShortcutFile::for_record(&record);

    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("create dir: {}", out_dir.display()))?;
    let path = out_dir.join(&file.filename);
    tokio::fs::write(&path, &file.bytes)
        .await
        .with_context(|| format!("write shortcut: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = file.content_length(), "exported shortcut");
    println!("Wrote {}", path.display());
    Ok(())
}
