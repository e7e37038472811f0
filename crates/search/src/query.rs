//! Query engine: substring search and inverted index lookups.
//!
//! Every query is a pure read of the catalog. Searches are full scans, and
//! results are returned fully materialized for the caller to number and
//! display.

use crate::matchers::{KeywordMatcher, TitleMatcher};
use crate::sort;
use crate::traits::FieldMatcher;
use data_loader::{MovieCatalog, MovieRecord};
use std::sync::Arc;
use tracing::debug;

/// Which inverted index to read keys from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Cast,
    Genre,
}

/// Read-only query surface over a loaded catalog
#[derive(Clone)]
pub struct QueryEngine {
    catalog: Arc<MovieCatalog>,
}

impl QueryEngine {
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    /// Scan every record with `matcher`, keeping matches in store order
    pub fn search(&self, matcher: &dyn FieldMatcher) -> Vec<&MovieRecord> {
        let results: Vec<&MovieRecord> = self
            .catalog
            .records()
            .iter()
            .filter(|record| matcher.matches(record))
            .collect();

        debug!("{} matched {} records", matcher.name(), results.len());
        results
    }

    /// Records whose title contains `term` (case-insensitive), sorted by title.
    ///
    /// An empty term returns the whole store.
    pub fn search_titles(&self, term: &str) -> Vec<&MovieRecord> {
        debug!("Searching titles for '{}'", term);
        let mut results = self.search(&TitleMatcher::new(term));
        sort::sort_records(&mut results, sort::by_title);
        results
    }

    /// Records whose keyword text contains `term` (case-insensitive), sorted by title
    pub fn search_keywords(&self, term: &str) -> Vec<&MovieRecord> {
        debug!("Searching keywords for '{}'", term);
        let mut results = self.search(&KeywordMatcher::new(term));
        sort::sort_records(&mut results, sort::by_title);
        results
    }

    /// Records featuring exactly `name`, in store order.
    ///
    /// An unknown name yields an empty list.
    pub fn lookup_cast(&self, name: &str) -> Vec<&MovieRecord> {
        let results = self.catalog.movies_with_cast(name);
        debug!("Cast lookup '{}' found {} records", name, results.len());
        results
    }

    /// Records tagged with exactly `genre`, in store order
    pub fn lookup_genre(&self, genre: &str) -> Vec<&MovieRecord> {
        let results = self.catalog.movies_in_genre(genre);
        debug!("Genre lookup '{}' found {} records", genre, results.len());
        results
    }

    /// Distinct keys of an index, ascending
    pub fn list_keys(&self, kind: IndexKind) -> Vec<&str> {
        let mut keys: Vec<&str> = match kind {
            IndexKind::Cast => self.catalog.cast_names().collect(),
            IndexKind::Genre => self.catalog.genre_names().collect(),
        };
        keys.sort_unstable();
        keys
    }

    /// Cast names containing `term` (case-insensitive), ascending.
    ///
    /// Used to pick an exact name before calling [`Self::lookup_cast`].
    pub fn match_cast_names(&self, term: &str) -> Vec<&str> {
        let term = term.to_lowercase();
        let names: Vec<&str> = self
            .list_keys(IndexKind::Cast)
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&term))
            .collect();

        debug!("Cast name search '{}' found {} names", term, names.len());
        names
    }

    /// First record in store order whose title equals `title` exactly
    pub fn find_title(&self, title: &str) -> Option<&MovieRecord> {
        self.catalog.records().iter().find(|r| r.title == title)
    }
}
