mod download;
mod landing;
mod language;

pub use download::attachment;
pub use landing::LandingPage;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full router: landing listing, downloads, language switch and
/// uploaded images.
pub fn router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(state.store.uploads_dir());
    Router::new()
        .route("/", get(landing::landing))
        .route("/api/shortcuts", get(landing::shortcuts))
        .route("/site/{id}/download", get(download::download_site))
        .route("/folder/{id}/download", get(download::download_folder))
        .route("/language/{locale}", get(language::switch_language))
        .nest_service("/uploads", uploads)
        .fallback(language::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
