//! Landing page data: the sorted, filtered listing for the active view.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::Json;
use serde::Serialize;
use wall_core::i18n::translate;
use wall_core::listing::{Listing, ListingView, ViewKind, ViewState};

use crate::error::ServerError;
use crate::state::{AppState, RequestLocale};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage<'a> {
    pub app_name: &'a str,
    pub locale: &'static str,
    pub next_locale: &'static str,
    pub title: String,
    pub empty_message: String,
    pub support_email: Option<&'a str>,
    pub support_phone: Option<&'a str>,
    pub listing: ListingView<'a>,
}

async fn load_listing(
    state: &AppState,
    query: Option<String>,
    locale: RequestLocale,
) -> Result<Listing, ServerError> {
    let view = ViewState::from_query_str(query.as_deref().unwrap_or_default());
    let records = state
        .store
        .list(view.view.record_kind())
        .await
        .map_err(|e| ServerError::from_store(e, locale.as_str()))?;
    Ok(Listing::new(records, view))
}

/// `GET /api/shortcuts?type=&sort=&q=`
pub async fn shortcuts(
    State(state): State<Arc<AppState>>,
    locale: RequestLocale,
    RawQuery(query): RawQuery,
) -> Result<Json<serde_json::Value>, ServerError> {
    let listing = load_listing(&state, query, locale).await?;
    let body = serde_json::to_value(ListingView::from(&listing))
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    Ok(Json(body))
}

/// `GET /?type=&sort=&q=`
pub async fn landing(
    State(state): State<Arc<AppState>>,
    locale: RequestLocale,
    RawQuery(query): RawQuery,
) -> Result<Json<serde_json::Value>, ServerError> {
    let listing = load_listing(&state, query, locale).await?;
    let loc = locale.as_str();
    let empty_key = match listing.state().view {
        ViewKind::Sites => "shortcuts.siteEmpty",
        ViewKind::Folders => "shortcuts.folderEmpty",
    };
    let page = LandingPage {
        app_name: &state.config.app_name,
        locale: loc,
        next_locale: wall_core::i18n::next_locale(loc),
        title: translate(loc, "app.homeTitle", &[]),
        empty_message: translate(loc, empty_key, &[]),
        support_email: state.config.support_email.as_deref(),
        support_phone: state.config.support_phone.as_deref(),
        listing: ListingView::from(&listing),
    };
    let body = serde_json::to_value(&page).map_err(|e| ServerError::Internal(e.to_string()))?;
    Ok(Json(body))
}
