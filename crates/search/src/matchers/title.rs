//! Case-insensitive substring match on the title.

use crate::traits::FieldMatcher;
use data_loader::MovieRecord;

/// Matches records whose title contains the term, ignoring case
pub struct TitleMatcher {
    term: String,
}

impl TitleMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }
}

impl FieldMatcher for TitleMatcher {
    fn name(&self) -> &str {
        "TitleMatcher"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.title.to_lowercase().contains(&self.term)
    }
}
