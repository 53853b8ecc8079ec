//! HTTP server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use wall_core::config::WallConfig;
use wall_core::RecordStore;

use crate::routes::router;
use crate::state::AppState;

/// Opens the record store described by `config` and builds the shared state.
pub async fn build_state(config: WallConfig) -> Result<Arc<AppState>> {
    let data_dir = config.resolved_data_dir()?;
    let uploads_dir = config.resolved_uploads_dir()?;
    let store = RecordStore::open(&data_dir, &uploads_dir)
        .await
        .with_context(|| format!("open record store in {}", data_dir.display()))?;
    Ok(AppState::new(config, store))
}

/// Binds `host:port` from the config and serves until Ctrl-C.
pub async fn serve(config: WallConfig) -> Result<()> {
    let state = build_state(config).await?;
    let addr = state.config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    let local: SocketAddr = listener.local_addr()?;
    info!("{} listening on http://{}", state.config.app_name, local);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
