//! Shared application state injected into every handler.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use wall_core::config::WallConfig;
use wall_core::i18n;
use wall_core::RecordStore;

/// Cookie remembering the visitor's language choice.
pub const LOCALE_COOKIE: &str = "lang";

pub struct AppState {
    pub config: WallConfig,
    pub store: RecordStore,
}

impl AppState {
    pub fn new(config: WallConfig, store: RecordStore) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}

/// Locale for the current request: the `lang` cookie if it names a
/// supported locale, otherwise the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub &'static str);

impl RequestLocale {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl FromRequestParts<Arc<AppState>> for RequestLocale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let from_cookie = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(cookie_locale);
        Ok(RequestLocale(from_cookie.unwrap_or_else(|| state.config.locale())))
    }
}

fn cookie_locale(header: &str) -> Option<&'static str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == LOCALE_COOKIE)
            .then(|| i18n::normalize_locale(value))
            .flatten()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lang_cookie() {
        assert_eq!(cookie_locale("lang=en"), Some("en"));
        assert_eq!(cookie_locale("sid=abc; lang=FR; other=1"), Some("fr"));
        assert_eq!(cookie_locale("lang=de"), None);
        assert_eq!(cookie_locale("language=en"), None);
    }
}
