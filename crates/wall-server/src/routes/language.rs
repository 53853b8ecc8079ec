//! Language switch and the not-found fallback.

use axum::extract::Path;
use axum::http::header::{HOST, LOCATION, REFERER, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use wall_core::i18n::{normalize_locale, translate};

use crate::error::ServerError;
use crate::state::{RequestLocale, LOCALE_COOKIE};

/// `GET /language/{locale}`: remembers the locale and sends the visitor back.
pub async fn switch_language(
    locale: RequestLocale,
    Path(requested): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let Some(next) = normalize_locale(&requested) else {
        return Err(ServerError::BadRequest(translate(
            locale.as_str(),
            "errors.languageNotSupported",
            &[],
        )));
    };

    let location = HeaderValue::from_str(&redirect_target(&headers))?;
    let cookie = HeaderValue::from_str(&format!("{LOCALE_COOKIE}={next}; Path=/; SameSite=Lax"))?;
    tracing::debug!(locale = next, "language switched");

    Ok((
        StatusCode::FOUND,
        [(LOCATION, location), (SET_COOKIE, cookie)],
    )
        .into_response())
}

/// Path to send the visitor back to: the Referer's path and query when it is
/// relative or points at this host, `/` otherwise.
fn redirect_target(headers: &HeaderMap) -> String {
    let Some(referer) = headers.get(REFERER).and_then(|v| v.to_str().ok()) else {
        return "/".to_string();
    };
    if referer.starts_with("//") || referer.contains('\\') {
        return "/".to_string();
    }
    let Ok(uri) = referer.parse::<Uri>() else {
        return "/".to_string();
    };
    if let Some(authority) = uri.authority() {
        let host = headers.get(HOST).and_then(|v| v.to_str().ok());
        if !host.is_some_and(|h| h.eq_ignore_ascii_case(authority.as_str())) {
            return "/".to_string();
        }
    }
    match uri.path_and_query().map(|pq| pq.as_str()) {
        Some(target) if target.starts_with('/') && !target.starts_with("//") => target.to_string(),
        _ => "/".to_string(),
    }
}

pub async fn not_found(locale: RequestLocale) -> ServerError {
    ServerError::NotFound(translate(locale.as_str(), "notFound.message", &[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn relative_referer_is_kept() {
        let h = headers(&[(REFERER, "/?type=folders&sort=recent")]);
        assert_eq!(redirect_target(&h), "/?type=folders&sort=recent");
        assert_eq!(redirect_target(&HeaderMap::new()), "/");
    }

    #[test]
    fn same_host_referer_keeps_path_only() {
        let h = headers(&[
            (HOST, "wall.local:3050"),
            (REFERER, "http://wall.local:3050/?type=folders"),
        ]);
        assert_eq!(redirect_target(&h), "/?type=folders");
    }

    #[test]
    fn foreign_referers_go_home() {
        for referer in [
            "https://evil.example/phish",
            "//evil.example/x",
            "/\\evil.example",
            "http://user@wall.local/",
        ] {
            let h = headers(&[(HOST, "wall.local"), (REFERER, referer)]);
            assert_eq!(redirect_target(&h), "/", "referer: {referer}");
        }
        let h = headers(&[(REFERER, "https://wall.local/")]);
        assert_eq!(redirect_target(&h), "/");
    }
}
