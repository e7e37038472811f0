//! Core traits for record searching.
//!
//! This module defines the FieldMatcher trait that lets the query engine run
//! the same full scan against different record fields.

use data_loader::MovieRecord;

/// Decides whether a single record matches a search term.
///
/// Implementations fold case once at construction, so `matches` only has to
/// fold the record side.
pub trait FieldMatcher {
    /// Returns the name of this matcher (for logging/debugging)
    fn name(&self) -> &str;

    /// Returns true if `record` matches
    fn matches(&self, record: &MovieRecord) -> bool;
}
