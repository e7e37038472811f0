//! # Data Loader Crate
//!
//! This crate loads the movie data file and builds the in-memory catalog.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and `MovieCatalog` (record store + indexes)
//! - **parser**: Parse the comma/pipe delimited data file into records
//! - **index**: Build the cast and genre inverted indexes
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieCatalog;
//! use std::path::Path;
//!
//! // Load the entire data file
//! let catalog = MovieCatalog::load_from_file(Path::new("movies_data.csv"))?;
//!
//! // Exact-key lookups into the inverted indexes
//! let dramas = catalog.movies_in_genre("Drama");
//! let films = catalog.movies_with_cast("Tom Hanks");
//!
//! println!("{} dramas, {} Tom Hanks films", dramas.len(), films.len());
//! ```
//!
//! The catalog is immutable after loading. Searching and ranking live in the
//! `search` crate.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{build_cast_index, build_genre_index};
pub use types::{MovieCatalog, MovieRecord, RecordId, split_keywords, split_subfields};
