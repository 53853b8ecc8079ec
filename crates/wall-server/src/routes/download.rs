//! `.url` shortcut downloads for sites and folders.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;
use wall_core::shortcut::{self, ShortcutFile};
use wall_core::RecordKind;

use crate::error::ServerError;
use crate::state::{AppState, RequestLocale};

pub async fn download_site(
    State(state): State<Arc<AppState>>,
    locale: RequestLocale,
    Path(id): Path<String>,
) -> Result<Response, ServerError> {
    download(&state, RecordKind::Site, &id, locale).await
}

pub async fn download_folder(
    State(state): State<Arc<AppState>>,
    locale: RequestLocale,
    Path(id): Path<String>,
) -> Result<Response, ServerError> {
    download(&state, RecordKind::Folder, &id, locale).await
}

async fn download(
    state: &AppState,
    kind: RecordKind,
    id: &str,
    locale: RequestLocale,
) -> Result<Response, ServerError> {
    let record = state
        .store
        .get(kind, id)
        .await
        .map_err(|e| ServerError::from_store(e, locale.as_str()))?;

    let file = ShortcutFile::for_record(&record);
    tracing::info!(kind = %kind, id, filename = %file.filename, "serving shortcut");
    attachment(file)
}

/// Wraps a rendered shortcut in an attachment response.
pub fn attachment(file: ShortcutFile) -> Result<Response, ServerError> {
    let disposition = HeaderValue::from_str(&file.content_disposition())?;
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, shortcut::CONTENT_TYPE)
        .header(CONTENT_DISPOSITION, disposition)
        .header(CONTENT_LENGTH, file.content_length())
        .body(Body::from(file.bytes))?;
    Ok(response)
}
