//! Core domain types for the movie catalog.
//!
//! - `MovieRecord`: one row of the data file, immutable once parsed
//! - `MovieCatalog`: the record store plus the cast and genre inverted indexes
//!
//! The catalog owns every record. Indexes refer to records by `RecordId`
//! (their position in the store), so they never copy record content.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a record in the store (0-based, store order)
///
/// Display numbering is 1-based and belongs to the caller.
pub type RecordId = usize;

/// Delimiter between the values of a multi-valued field (cast, keywords, genres)
pub const SUBFIELD_DELIMITER: char = '|';

// =============================================================================
// Record Type
// =============================================================================

/// A single movie as read from the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Cast member names in file order
    pub cast: Vec<String>,
    pub director: String,
    pub tagline: String,
    pub keywords: Vec<String>,
    pub overview: String,
    /// Running time in minutes
    pub runtime: u32,
    /// Genre names in file order
    pub genres: Vec<String>,
    /// Average user rating, roughly 0.0 - 10.0
    pub user_rating: f64,
    pub year: i32,
    /// Box office revenue in currency units
    pub revenue: i64,
}

impl MovieRecord {
    /// Keywords joined back into their raw pipe-delimited form.
    ///
    /// Keyword search scans this single string, so a term may span the
    /// boundary between two consecutive keywords.
    pub fn keyword_text(&self) -> String {
        join_subfields(&self.keywords)
    }

    /// Cast joined back into its raw pipe-delimited form
    pub fn cast_text(&self) -> String {
        join_subfields(&self.cast)
    }

    /// Genres joined back into their raw pipe-delimited form
    pub fn genre_text(&self) -> String {
        join_subfields(&self.genres)
    }
}

/// Split a raw cast or genre field into its values.
///
/// No escaping is supported: every `|` is a separator. Empty pieces are
/// dropped, so an empty field has no values and `"Drama|"` or `"A||B"` never
/// produce a blank index key.
pub fn split_subfields(raw: &str) -> Vec<String> {
    raw.split(SUBFIELD_DELIMITER)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a raw keyword field, keeping empty pieces.
///
/// Keywords are never indexed, only scanned as joined text, so the split is
/// exact: `join_subfields(&split_keywords(s)) == s` for every input. An empty
/// field has no keywords.
pub fn split_keywords(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(SUBFIELD_DELIMITER).map(str::to_string).collect()
}

fn join_subfields(values: &[String]) -> String {
    values.join("|")
}

// =============================================================================
// MovieCatalog - The In-Memory Store
// =============================================================================

/// Record store plus the two inverted indexes derived from it.
///
/// Built once by [`MovieCatalog::from_records`] (or one of the loaders in
/// `index.rs`) and read-only afterwards. There are no mutators.
#[derive(Debug)]
pub struct MovieCatalog {
    /// All records in file order
    pub(crate) records: Vec<MovieRecord>,

    /// Cast member name -> records featuring them, in store order
    pub(crate) cast_index: HashMap<String, Vec<RecordId>>,
    /// Genre name -> records in that genre, in store order
    pub(crate) genre_index: HashMap<String, Vec<RecordId>>,
}

impl MovieCatalog {
    /// All records in store order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Get a record by its store position
    pub fn get(&self, id: RecordId) -> Option<&MovieRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids of the records featuring `name` (exact, case-sensitive)
    ///
    /// Returns an empty slice if nobody by that name is in the cast index
    pub fn cast_ids(&self, name: &str) -> &[RecordId] {
        self.cast_index
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Ids of the records in `genre` (exact, case-sensitive)
    pub fn genre_ids(&self, genre: &str) -> &[RecordId] {
        self.genre_index
            .get(genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Records featuring `name`, in store order
    pub fn movies_with_cast(&self, name: &str) -> Vec<&MovieRecord> {
        self.resolve(self.cast_ids(name))
    }

    /// Records in `genre`, in store order
    pub fn movies_in_genre(&self, genre: &str) -> Vec<&MovieRecord> {
        self.resolve(self.genre_ids(genre))
    }

    /// Distinct cast member names, in no particular order
    pub fn cast_names(&self) -> impl Iterator<Item = &str> {
        self.cast_index.keys().map(String::as_str)
    }

    /// Distinct genre names, in no particular order
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genre_index.keys().map(String::as_str)
    }

    /// (records, distinct cast names, distinct genres)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.records.len(),
            self.cast_index.len(),
            self.genre_index.len(),
        )
    }

    fn resolve(&self, ids: &[RecordId]) -> Vec<&MovieRecord> {
        ids.iter().filter_map(|&id| self.records.get(id)).collect()
    }
}
