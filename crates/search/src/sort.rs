//! Record orderings shared by the query and ranking engines.
//!
//! Every ordering here is stable: records that compare equal keep their
//! relative input order. Since inputs are always in store order, ties end up
//! broken by store position.

use data_loader::MovieRecord;
use std::cmp::Ordering;

/// Comparator over two records
pub type RecordComparator = fn(&MovieRecord, &MovieRecord) -> Ordering;

/// Title ascending, plain code point comparison (no locale collation)
pub fn by_title(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    a.title.cmp(&b.title)
}

/// User rating descending
pub fn by_rating_desc(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    // Ratings are finite by construction; -0.0 and 0.0 tie
    b.user_rating
        .partial_cmp(&a.user_rating)
        .unwrap_or(Ordering::Equal)
}

/// Revenue descending
pub fn by_revenue_desc(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    b.revenue.cmp(&a.revenue)
}

/// Stable sort of a result list in place
pub fn sort_records(records: &mut [&MovieRecord], compare: RecordComparator) {
    records.sort_by(|a, b| compare(a, b));
}
