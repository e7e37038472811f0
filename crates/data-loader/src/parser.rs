//! Parser for the movie data file.
//!
//! Layout: one header line, then one movie per line with 11 comma-separated
//! fields:
//!
//! `title,cast,director,tagline,keywords,overview,runtime,genres,user_rating,year,revenue`
//!
//! `cast`, `keywords` and `genres` are pipe-separated lists. Neither delimiter
//! can be escaped or quoted; a comma inside a title simply produces an extra
//! field and the line is rejected.

use crate::error::{DataLoadError, Result};
use crate::types::{MovieRecord, split_keywords, split_subfields};
use std::io::BufRead;

/// Number of comma-separated fields on every record line
pub const FIELD_COUNT: usize = 11;

const FIELD_DELIMITER: char = ',';

/// Parse every record line from `reader`.
///
/// The first line is the header and is skipped. Blank lines are skipped.
/// The first malformed line aborts the whole parse, so a caller either gets
/// every record or none.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<MovieRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        if line_no == 1 {
            continue; // Header
        }

        let bytes = line?;
        let text = String::from_utf8_lossy(&bytes);
        let line = text.strip_suffix('\r').unwrap_or(text.as_ref());
        if line.trim().is_empty() {
            continue;
        }

        records.push(parse_line(line, line_no)?);
    }

    Ok(records)
}

/// Parse a single record line.
///
/// `line_no` is only used for error context.
pub fn parse_line(line: &str, line_no: usize) -> Result<MovieRecord> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return Err(DataLoadError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: parts.len(),
            line: line_no,
        });
    }

    let user_rating: f64 = parse_number(parts[8], "user_rating", line_no)?;
    if !user_rating.is_finite() {
        return Err(DataLoadError::ParseError {
            line: line_no,
            field: "user_rating",
            reason: format!("rating must be a finite number, got '{}'", parts[8]),
        });
    }

    Ok(MovieRecord {
        title: parts[0].to_string(),
        cast: split_subfields(parts[1]),
        director: parts[2].to_string(),
        tagline: parts[3].to_string(),
        keywords: split_keywords(parts[4]),
        overview: parts[5].to_string(),
        runtime: parse_number(parts[6], "runtime", line_no)?,
        genres: split_subfields(parts[7]),
        user_rating,
        year: parse_number(parts[9], "year", line_no)?,
        revenue: parse_number(parts[10], "revenue", line_no)?,
    })
}

/// Parse a numeric field, surrounding whitespace ignored
fn parse_number<T>(raw: &str, field: &'static str, line_no: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e| DataLoadError::ParseError {
        line: line_no,
        field,
        reason: format!("invalid value '{}': {}", raw, e),
    })
}
