//! Unified server error type.
//!
//! Handlers return `Result<T, ServerError>`; client-facing variants carry an
//! already-localized message, internal ones are logged and replaced by a
//! generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use wall_core::i18n::translate;
use wall_core::{RecordKind, StoreError};

#[derive(Debug, Error)]
pub enum ServerError {
    /// The requested record (or route) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Maps a store failure to a response, localizing the client-facing text.
    pub fn from_store(err: StoreError, locale: &str) -> Self {
        match err {
            StoreError::NotFound { kind, .. } => {
                ServerError::NotFound(translate(locale, not_found_key(kind), &[]))
            }
            StoreError::MissingFields { kind } => {
                let key = match kind {
                    RecordKind::Site => "errors.missingSiteFields",
                    RecordKind::Folder => "errors.missingFolderFields",
                };
                ServerError::BadRequest(translate(locale, key, &[]))
            }
            other => ServerError::Internal(other.to_string()),
        }
    }
}

fn not_found_key(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Site => "errors.siteNotFound",
        RecordKind::Folder => "errors.folderNotFound",
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match self {
            ServerError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<axum::http::Error> for ServerError {
    fn from(e: axum::http::Error) -> Self {
        ServerError::Internal(e.to_string())
    }
}

impl From<axum::http::header::InvalidHeaderValue> for ServerError {
    fn from(e: axum::http::header::InvalidHeaderValue) -> Self {
        ServerError::Internal(e.to_string())
    }
}
