//! Case-insensitive substring match on the keyword list.
//!
//! The keywords are scanned as their raw pipe-joined text, so a term can match
//! across the boundary between two consecutive keywords (`"ship|sp"` matches
//! `spaceship|space`).

use crate::traits::FieldMatcher;
use data_loader::MovieRecord;

/// Matches records whose joined keyword text contains the term, ignoring case
pub struct KeywordMatcher {
    term: String,
}

impl KeywordMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }
}

impl FieldMatcher for KeywordMatcher {
    fn name(&self) -> &str {
        "KeywordMatcher"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.keyword_text().to_lowercase().contains(&self.term)
    }
}
