//! Bookmarkable view state carried in the query string.

use serde::{Deserialize, Serialize};

use super::filter::SearchTerm;
use super::sort::SortMode;
use crate::record::RecordKind;

/// Which collection the landing page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    #[default]
    Sites,
    Folders,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Sites => "sites",
            ViewKind::Folders => "folders",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sites" => Some(ViewKind::Sites),
            "folders" => Some(ViewKind::Folders),
            _ => None,
        }
    }

    pub fn record_kind(self) -> RecordKind {
        match self {
            ViewKind::Sites => RecordKind::Site,
            ViewKind::Folders => RecordKind::Folder,
        }
    }
}

/// Raw query parameters as they arrive (`?type=&sort=&q=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    #[serde(rename = "type")]
    pub view: Option<String>,
    pub sort: Option<String>,
    pub q: Option<String>,
}

/// Validated view state. Unknown values fall back to `sites` / `alpha`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub view: ViewKind,
    pub sort: SortMode,
    pub term: SearchTerm,
}

impl ViewState {
    pub fn from_query(query: &ViewQuery) -> Self {
        Self {
            view: query
                .view
                .as_deref()
                .and_then(ViewKind::parse)
                .unwrap_or_default(),
            sort: query
                .sort
                .as_deref()
                .and_then(SortMode::parse)
                .unwrap_or_default(),
            term: SearchTerm::new(query.q.as_deref().unwrap_or_default()),
        }
    }

    /// Parses a raw query string such as `type=folders&sort=recent`.
    pub fn from_query_str(query: &str) -> Self {
        let mut raw = ViewQuery::default();
        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "type" => raw.view = Some(value.into_owned()),
                "sort" => raw.sort = Some(value.into_owned()),
                "q" => raw.q = Some(value.into_owned()),
                _ => {}
            }
        }
        Self::from_query(&raw)
    }

    /// Query string reproducing this view; the search term is included only
    /// when non-empty.
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        ser.append_pair("type", self.view.as_str());
        ser.append_pair("sort", self.sort.as_str());
        if !self.term.is_empty() {
            ser.append_pair("q", self.term.as_str());
        }
        ser.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_missing_or_unknown() {
        assert_eq!(ViewState::from_query_str(""), ViewState::default());
        let s = ViewState::from_query_str("type=printers&sort=random");
        assert_eq!(s.view, ViewKind::Sites);
        assert_eq!(s.sort, SortMode::Alpha);
    }

    #[test]
    fn parses_known_values() {
        let s = ViewState::from_query_str("?type=folders&sort=recent&q=Compta%20RH");
        assert_eq!(s.view, ViewKind::Folders);
        assert_eq!(s.sort, SortMode::Recent);
        assert_eq!(s.term.as_str(), "compta rh");
    }

    #[test]
    fn query_round_trip() {
        let s = ViewState::from_query_str("sort=recent&type=folders&q=x");
        assert_eq!(s.to_query(), "type=folders&sort=recent&q=x");
        assert_eq!(ViewState::from_query_str(&s.to_query()), s);
        assert_eq!(ViewState::default().to_query(), "type=sites&sort=alpha");
    }
}
