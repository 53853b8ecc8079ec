//! `shortcut-wall serve`: run the HTTP server until Ctrl-C.

use anyhow::Result;
use wall_core::config::WallConfig;

pub async fn run_serve(cfg: WallConfig) -> Result<()> {
    tracing::info!(addr = %cfg.bind_addr(), "starting server");
    wall_server::serve(cfg).await
}
