//! MovieCatalog construction and inverted index building.
//!
//! Steps:
//! 1. Parse the data file into records (whole load fails on a bad line)
//! 2. Build the cast index (name -> record ids)
//! 3. Build the genre index (genre -> record ids)
//!
//! Each index is built in a single pass over the store, appending in place,
//! so the ids under a key are always in store order.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

impl MovieCatalog {
    /// Load the catalog from a data file on disk
    ///
    /// This is the main entry point for the binary.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        Self::load_from_reader(BufReader::new(file))
    }

    /// Load the catalog from any buffered reader holding the file contents
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let start = Instant::now();
        let records = parser::parse_records(reader)?;
        let catalog = Self::from_records(records);

        let (movies, cast, genres) = catalog.counts();
        info!(
            "Loaded {} movies ({} cast members, {} genres) in {:?}",
            movies,
            cast,
            genres,
            start.elapsed()
        );
        Ok(catalog)
    }

    /// Build a catalog over already-parsed records.
    ///
    /// Takes ownership of the records; both indexes are derived here and never
    /// rebuilt.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let cast_index = build_cast_index(&records);
        let genre_index = build_genre_index(&records);

        Self {
            records,
            cast_index,
            genre_index,
        }
    }
}

/// Map each cast member name to the records they appear in
pub fn build_cast_index(records: &[MovieRecord]) -> HashMap<String, Vec<RecordId>> {
    let index = build_inverted_index(records, |movie| &movie.cast);
    debug!("Built cast index with {} names", index.len());
    index
}

/// Map each genre name to the records tagged with it
pub fn build_genre_index(records: &[MovieRecord]) -> HashMap<String, Vec<RecordId>> {
    let index = build_inverted_index(records, |movie| &movie.genres);
    debug!("Built genre index with {} genres", index.len());
    index
}

/// Single pass over the store, appending each record id under every distinct
/// value of the selected field.
fn build_inverted_index<F>(records: &[MovieRecord], field: F) -> HashMap<String, Vec<RecordId>>
where
    F: Fn(&MovieRecord) -> &Vec<String>,
{
    let mut index: HashMap<String, Vec<RecordId>> = HashMap::new();

    for (id, movie) in records.iter().enumerate() {
        for key in field(movie) {
            let ids = index.entry(key.clone()).or_default();
            // Ids arrive in increasing order, so a repeat within one record
            // can only be the last entry.
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
    }

    index
}
