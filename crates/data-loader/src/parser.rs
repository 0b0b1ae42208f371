//! Parser for the TMDB movies CSV snapshot.
//!
//! Format: a header row followed by one row per movie. Fields are quoted
//! whenever they contain commas, quotes or newlines, which is the norm for
//! `overview`, `genres` and `production_companies`. Only the columns in
//! [`REQUIRED_COLUMNS`] are read; everything else in the row is ignored.

use crate::error::{DataLoadError, Result};
use crate::types::MovieRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Columns the catalog needs from the snapshot
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "original_title",
    "overview",
    "genres",
    "production_companies",
    "original_language",
    "release_date",
    "revenue",
];

/// Raw row as it comes out of the CSV reader, before type conversion
#[derive(Debug, Deserialize)]
struct CatalogRow {
    original_title: Option<String>,
    overview: Option<String>,
    genres: Option<String>,
    production_companies: Option<String>,
    original_language: Option<String>,
    release_date: Option<String>,
    revenue: Option<String>,
}

/// Parse the catalog file at `path`
pub fn parse_catalog(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_catalog_from_reader(file, &path.display().to_string())
}

/// Parse catalog rows from any reader. `file` is only used in error messages.
pub fn parse_catalog_from_reader<R: Read>(reader: R, file: &str) -> Result<Vec<MovieRecord>> {
    let csv_error = |source: csv::Error| DataLoadError::CsvError {
        file: file.to_string(),
        source,
    };

    // Header names are trimmed here so validation and row decoding agree
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result.map_err(csv_error)?;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);

        let row: CatalogRow = raw
            .deserialize(Some(&headers))
            .map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line,
                reason: e.to_string(),
            })?;

        records.push(row_to_record(row, file, line)?);
    }

    Ok(records)
}

fn row_to_record(row: CatalogRow, file: &str, line: u64) -> Result<MovieRecord> {
    let revenue = parse_revenue(row.revenue.as_deref().unwrap_or("")).ok_or_else(|| {
        DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Invalid revenue: {:?}", row.revenue.unwrap_or_default()),
        }
    })?;

    Ok(MovieRecord {
        title: row.original_title.unwrap_or_default(),
        overview: row.overview.unwrap_or_default(),
        genres: row.genres.unwrap_or_default(),
        production_companies: row.production_companies.unwrap_or_default(),
        original_language: row.original_language.unwrap_or_default(),
        release_date: row.release_date.unwrap_or_default(),
        revenue,
    })
}

/// Parse a revenue cell
///
/// Example: "2787965087" -> Some(2787965087)
///          ""           -> Some(0)
///          "1.5e6"      -> Some(1500000)
///          "lots"       -> None
fn parse_revenue(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0);
    }
    if let Ok(value) = s.parse::<u64>() {
        return Some(value);
    }
    // Some exports write integers as floats
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.trunc() as u64),
        _ => None,
    }
}
