//! Projection of ranked catalog entries into the response shape.

use data_loader::{Catalog, MovieRecord};
use pipeline::ScoredDocument;
use serde::Serialize;
use tracing::warn;

/// One recommended movie, as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecommendation {
    pub title: String,
    pub genres: Vec<String>,
    pub overview: String,
    pub language: String,
    pub production_companies: Vec<String>,
    pub release_date: String,
    pub revenue: u64,
    pub similarity: f32,
}

impl MovieRecommendation {
    /// Project a record, decoding its genre and company lists
    pub fn from_record(record: &MovieRecord, similarity: f32) -> Self {
        Self {
            title: record.title.clone(),
            genres: record.genre_names(),
            overview: record.overview.clone(),
            language: record.original_language.clone(),
            production_companies: record.production_company_names(),
            release_date: record.release_date.clone(),
            revenue: record.revenue,
            similarity,
        }
    }
}

/// Map ranked entries back to their records, keeping the ranked order.
pub fn assemble(catalog: &Catalog, ranked: &[ScoredDocument]) -> Vec<MovieRecommendation> {
    ranked
        .iter()
        .filter_map(|scored| match catalog.get(scored.catalog_index) {
            Some(record) => Some(MovieRecommendation::from_record(record, scored.score)),
            None => {
                warn!("Ranked index {} is not in the catalog", scored.catalog_index);
                None
            }
        })
        .collect()
}
