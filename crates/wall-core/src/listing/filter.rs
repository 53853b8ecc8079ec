//! Free-text search over names and descriptions.

use crate::record::Record;

/// A case-folded, trimmed search term. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(fold(raw.trim()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.0.is_empty()
            || fold(&record.name).contains(&self.0)
            || fold(&record.description).contains(&self.0)
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}
