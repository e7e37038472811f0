//! Matcher implementations for the query engine.
//!
//! Both matchers do a case-insensitive substring test. An empty term is a
//! substring of everything and matches every record.

pub mod keyword;
pub mod title;

// Re-export for convenience
pub use keyword::KeywordMatcher;
pub use title::TitleMatcher;
