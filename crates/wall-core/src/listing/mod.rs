//! Presentation ordering and filtering of the landing page.
//!
//! A [`Listing`] owns one collection in display order plus the active
//! [`ViewState`]. Sorting reorders entries; searching only flips their
//! `visible` flag so clearing the term restores the same order.

mod filter;
mod sort;
mod view;

pub use filter::SearchTerm;
pub use sort::{collation_key, compare_names, sort_records, SortMode};
pub use view::{ViewKind, ViewQuery, ViewState};

use serde::Serialize;

use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub record: Record,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct Listing {
    entries: Vec<ListingEntry>,
    state: ViewState,
}

impl Listing {
    /// Sorts `records` by the state's mode, then applies its search term.
    pub fn new(records: Vec<Record>, state: ViewState) -> Self {
        let mut listing = Self {
            entries: records
                .into_iter()
                .map(|record| ListingEntry {
                    record,
                    visible: true,
                })
                .collect(),
            state,
        };
        listing.resort();
        listing.refilter();
        listing
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn entries(&self) -> &[ListingEntry] {
        &self.entries
    }

    /// Records currently shown, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Record> {
        self.entries
            .iter()
            .filter(|e| e.visible)
            .map(|e| &e.record)
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.state.sort = mode;
        self.resort();
        self.refilter();
    }

    pub fn set_term(&mut self, raw: &str) {
        self.state.term = SearchTerm::new(raw);
        self.refilter();
    }

    fn resort(&mut self) {
        let mode = self.state.sort;
        self.entries.sort_by(|a, b| mode.compare(&a.record, &b.record));
    }

    fn refilter(&mut self) {
        for entry in &mut self.entries {
            entry.visible = self.state.term.matches(&entry.record);
        }
    }
}

/// Serializable snapshot of a listing, as returned by the landing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ListingView<'a> {
    pub view: ViewKind,
    pub sort: SortMode,
    pub term: &'a str,
    pub query: String,
    pub entries: &'a [ListingEntry],
}

impl<'a> From<&'a Listing> for ListingView<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            view: listing.state.view,
            sort: listing.state.sort,
            term: listing.state.term.as_str(),
            query: listing.state.to_query(),
            entries: &listing.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NewRecord, RecordKind};

    fn rec(name: &str, description: &str, created_at: &str) -> Record {
        let mut r = Record::create(
            RecordKind::Site,
            NewRecord {
                name: name.into(),
                target: "https://example.com".into(),
                description: Some(description.into()),
                image_url: None,
            },
        );
        r.created_at = created_at.into();
        r
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("Wiki", "documentation", "2024-03-01T00:00:00Z"),
            rec("Intranet", "portail RH", "2024-01-01T00:00:00Z"),
            rec("Mail", "webmail", "2024-02-01T00:00:00Z"),
        ]
    }

    fn order(listing: &Listing) -> Vec<&str> {
        listing.entries().iter().map(|e| e.record.name.as_str()).collect()
    }

    #[test]
    fn new_sorts_then_filters() {
        let state = ViewState::from_query_str("sort=recent&q=mail");
        let listing = Listing::new(sample(), state);
        assert_eq!(order(&listing), ["Wiki", "Mail", "Intranet"]);
        let shown: Vec<_> = listing.visible().map(|r| r.name.as_str()).collect();
        assert_eq!(shown, ["Mail"]);
    }

    #[test]
    fn clearing_term_restores_visibility_and_order() {
        let mut listing = Listing::new(sample(), ViewState::default());
        let before = order(&listing).into_iter().map(String::from).collect::<Vec<_>>();
        listing.set_term("RH");
        assert_eq!(listing.visible().count(), 1);
        assert_eq!(listing.entries().len(), 3);
        listing.set_term("");
        assert!(listing.entries().iter().all(|e| e.visible));
        assert_eq!(order(&listing), before);
    }

    #[test]
    fn resorting_keeps_filter() {
        let mut listing = Listing::new(sample(), ViewState::from_query_str("q=i"));
        listing.set_sort(SortMode::Recent);
        assert_eq!(order(&listing), ["Wiki", "Mail", "Intranet"]);
        assert_eq!(listing.state().sort, SortMode::Recent);
        assert!(listing.entries().iter().all(|e| e.visible));
        listing.set_term("webmail");
        let shown: Vec<_> = listing.visible().map(|r| r.name.as_str()).collect();
        assert_eq!(shown, ["Mail"]);
    }

    #[test]
    fn view_snapshot_carries_query() {
        let listing = Listing::new(sample(), ViewState::from_query_str("type=folders&sort=recent"));
        let view = ListingView::from(&listing);
        assert_eq!(view.query, "type=folders&sort=recent");
        assert_eq!(view.entries.len(), 3);
    }
}
