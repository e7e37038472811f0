//! Ranking engine: top-N listings by a numeric field.
//!
//! ## Algorithm
//! 1. Take every record in store order
//! 2. Stable sort descending on the chosen field
//! 3. Keep the first `n`
//!
//! Ties keep store order because the sort is stable and the input is in store
//! order.

use crate::sort::{self, RecordComparator};
use data_loader::{MovieCatalog, MovieRecord};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Size of the listings offered by the interactive menu
pub const DEFAULT_TOP_N: usize = 50;

/// Numeric field a ranking is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Rating,
    Revenue,
}

impl RankBy {
    /// Descending comparator for this field
    pub fn comparator(self) -> RecordComparator {
        match self {
            RankBy::Rating => sort::by_rating_desc,
            RankBy::Revenue => sort::by_revenue_desc,
        }
    }
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBy::Rating => write!(f, "rating"),
            RankBy::Revenue => write!(f, "revenue"),
        }
    }
}

/// Produces top-N listings over a loaded catalog
#[derive(Clone)]
pub struct RankingEngine {
    catalog: Arc<MovieCatalog>,
}

impl RankingEngine {
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// The `n` highest records by `rank_by`.
    ///
    /// Returns `min(n, catalog size)` records; `n == 0` returns nothing.
    #[instrument(skip(self))]
    pub fn top(&self, rank_by: RankBy, n: usize) -> Vec<&MovieRecord> {
        let mut ranked: Vec<&MovieRecord> = self.catalog.records().iter().collect();
        sort::sort_records(&mut ranked, rank_by.comparator());
        ranked.truncate(n);

        debug!("Ranked top {} by {}", ranked.len(), rank_by);
        ranked
    }

    /// The `n` highest rated records, ties in store order
    pub fn top_by_rating(&self, n: usize) -> Vec<&MovieRecord> {
        self.top(RankBy::Rating, n)
    }

    /// The `n` highest grossing records, ties in store order
    pub fn top_by_revenue(&self, n: usize) -> Vec<&MovieRecord> {
        self.top(RankBy::Revenue, n)
    }
}
