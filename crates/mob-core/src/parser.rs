//! Parser for comma-separated creature drop tables
//!
//! The format is deliberately simple: every `,` separates columns and there
//! is no quoting or escaping, so a value containing a comma shifts the
//! columns of its line. Such lines usually fail the column-count check and
//! are skipped.

use crate::error::{Error, Result};
use crate::record::{Field, RawRecord, EXPECTED_HEADERS};

const BOM: char = '\u{feff}';

/// Parse drop table text into raw records
///
/// The header must have exactly as many columns as [`EXPECTED_HEADERS`].
/// Data lines with a different column count are skipped.
pub fn parse_records(content: &str) -> Result<Vec<RawRecord>> {
    let content = normalize(content);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Line lengths are checked below
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n')) // `\r` of CRLF is trimmed with the value
        .from_reader(content.as_bytes());

    let headers: Vec<String> = if content.is_empty() {
        Vec::new()
    } else {
        csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect()
    };

    if headers.len() != EXPECTED_HEADERS.len() {
        return Err(Error::SchemaMismatch {
            expected: EXPECTED_HEADERS.len(),
            found: headers.len(),
            expected_headers: Field::ALL.iter().map(|f| f.header().to_string()).collect(),
            found_headers: headers,
        });
    }

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;

        let values: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();
        if is_blank(&values) {
            continue;
        }

        if values.len() != headers.len() {
            log::debug!(
                "skipping line {}: expected {} fields, found {}",
                record.position().map(|p| p.line()).unwrap_or(0),
                headers.len(),
                values.len()
            );
            continue;
        }

        records.push(RawRecord::new(&headers, values));
    }

    Ok(records)
}

/// Trim surrounding whitespace and drop one leading byte-order mark
fn normalize(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed.strip_prefix(BOM).unwrap_or(trimmed).trim_start()
}

fn is_blank(values: &[String]) -> bool {
    values.iter().all(|v| v.is_empty()) && values.len() <= 1
}
