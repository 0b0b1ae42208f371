//! Core domain types for the movie catalog.
//!
//! The catalog is a snapshot of the TMDB 5000 movies table. Each row becomes
//! a [`MovieRecord`]; the ordered collection of records is the [`Catalog`].
//! A record's position in the catalog is its identity for the rest of the
//! system: the similarity engine scores overviews by position and the
//! result assembler joins back by position.

use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a record in the catalog
pub type CatalogIndex = usize;

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie from the catalog snapshot.
///
/// `genres` and `production_companies` are kept exactly as they appear in the
/// source table (a JSON-encoded list of `{"id": .., "name": ..}` objects).
/// They are only decoded when a record is displayed, via [`decode_names`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Plot overview; empty when the source row had none
    pub overview: String,
    /// Serialized list of genre objects
    pub genres: String,
    /// Serialized list of production company objects
    pub production_companies: String,
    /// Short language code, e.g. "en"
    pub original_language: String,
    /// Release date as it appears in the snapshot (YYYY-MM-DD or empty)
    pub release_date: String,
    /// Box office revenue, zero when unknown
    pub revenue: u64,
}

impl MovieRecord {
    /// Build a record with only a title and an overview; every other field
    /// is left empty. Handy for tests and synthetic catalogs.
    pub fn new(title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            overview: overview.into(),
            genres: String::new(),
            production_companies: String::new(),
            original_language: String::new(),
            release_date: String::new(),
            revenue: 0,
        }
    }

    /// Whether this record takes part in similarity scoring
    pub fn has_overview(&self) -> bool {
        !self.overview.trim().is_empty()
    }

    /// Display names of this movie's genres
    pub fn genre_names(&self) -> Vec<String> {
        decode_names(&self.genres)
    }

    /// Display names of this movie's production companies
    pub fn production_company_names(&self) -> Vec<String> {
        decode_names(&self.production_companies)
    }
}

/// One element of a serialized genre / company list
#[derive(Debug, Clone, Deserialize)]
struct NamedEntity {
    name: String,
}

/// Decode a serialized list of named entities into its names.
///
/// Anything that is not a JSON array of objects with a string `name` decodes
/// to an empty list. Duplicate names are dropped, keeping the first.
///
/// Example: `[{"id": 28, "name": "Action"}]` -> `["Action"]`
pub fn decode_names(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<NamedEntity>>(raw) {
        Ok(entities) => {
            let mut names: Vec<String> = Vec::with_capacity(entities.len());
            for entity in entities {
                if !names.contains(&entity.name) {
                    names.push(entity.name);
                }
            }
            names
        }
        Err(e) => {
            debug!("Undecodable name list {:?}: {}", raw, e);
            Vec::new()
        }
    }
}

// =============================================================================
// Catalog - The In-Memory Movie Table
// =============================================================================

/// Ordered, read-only collection of movie records.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so concurrent requests read it without locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) records: Vec<MovieRecord>,
}

impl Catalog {
    /// Wrap an already-parsed list of records, keeping their order
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Get a record by catalog position
    pub fn get(&self, index: CatalogIndex) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.iter()
    }
}
