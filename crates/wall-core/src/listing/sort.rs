//! Record ordering: alphabetical or most recent first.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::record::Record;

/// Active ordering of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Alpha,
    Recent,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Alpha => "alpha",
            SortMode::Recent => "recent",
        }
    }

    /// Parses a query value; anything unknown yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "alpha" => Some(SortMode::Alpha),
            "recent" => Some(SortMode::Recent),
            _ => None,
        }
    }

    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortMode::Alpha => compare_names(a, b),
            SortMode::Recent => epoch_millis(b)
                .cmp(&epoch_millis(a))
                .then_with(|| compare_names(a, b)),
        }
    }
}

/// Sorts in place. The sort is stable, so records that compare equal keep
/// their incoming order.
pub fn sort_records(records: &mut [Record], mode: SortMode) {
    records.sort_by(|a, b| mode.compare(a, b));
}

/// Case- and accent-insensitive comparison of display keys.
pub fn compare_names(a: &Record, b: &Record) -> Ordering {
    collation_key(a.display_key()).cmp(&collation_key(b.display_key()))
}

/// Base-letter key: decomposed, combining marks dropped, lowercased.
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Missing or unparseable timestamps count as the epoch.
fn epoch_millis(record: &Record) -> i64 {
    record
        .created_time()
        .map(|t| t.timestamp_millis())
        .unwrap_or(0)
}
