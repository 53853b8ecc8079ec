//! CLI command handlers, one file per command group.

mod export;
mod records;
mod serve;

pub use export::run_export;
pub use records::{run_add, run_list, run_remove, run_update};
pub use serve::run_serve;

use anyhow::{Context, Result};
use wall_core::config::WallConfig;
use wall_core::RecordStore;

/// Opens the record store configured in `cfg`.
pub async fn open_store(cfg: &WallConfig) -> Result<RecordStore> {
    let data_dir = cfg.resolved_data_dir()?;
    RecordStore::open(&data_dir, cfg.resolved_uploads_dir()?)
        .await
        .with_context(|| format!("open record store in {}", data_dir.display()))
}
