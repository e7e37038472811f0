//! Searching and ranking over a loaded movie catalog.
//!
//! This crate provides:
//! - FieldMatcher trait and implementations for substring search
//! - QueryEngine for searches, index lookups and key listings
//! - RankingEngine for top-N listings by rating or revenue
//! - sort: the shared stable orderings both engines use
//!
//! ## Architecture
//! The catalog is loaded once and shared through an `Arc`. Both engines only
//! read from it, and every call returns a freshly built result list that the
//! caller owns.
//!
//! ## Example Usage
//! ```ignore
//! use search::{QueryEngine, RankingEngine, DEFAULT_TOP_N};
//!
//! let catalog = Arc::new(MovieCatalog::load_from_file(path)?);
//! let query = QueryEngine::new(catalog.clone());
//! let ranking = RankingEngine::new(catalog);
//!
//! let hits = query.search_titles("star");
//! let best = ranking.top_by_rating(DEFAULT_TOP_N);
//! ```

pub mod traits;
pub mod matchers;
pub mod query;
pub mod ranking;
pub mod sort;

// Re-export main types
pub use traits::FieldMatcher;
pub use matchers::{KeywordMatcher, TitleMatcher};
pub use query::{IndexKind, QueryEngine};
pub use ranking::{DEFAULT_TOP_N, RankBy, RankingEngine};
