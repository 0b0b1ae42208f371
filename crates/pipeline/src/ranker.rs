//! Ranker that drops the presumed self match.
//!
//! The best-scoring overview is usually the query movie's own record, so it
//! is never surfaced. This is a heuristic: when the query title is not in
//! the catalog the best genuine match is dropped as well.

use crate::similarity::{ScoredDocument, SimilarityVector};
use crate::traits::Ranker;
use tracing::debug;

/// Number of recommendations returned by default
pub const DEFAULT_LIMIT: usize = 5;

/// Number of top matches discarded by default
pub const DEFAULT_EXCLUDED: usize = 1;

/// Orders by descending score, skips the top `excluded` entries and keeps
/// the next `limit`.
///
/// Equal scores are ordered by descending catalog index: among ties the
/// highest index counts as the top match and is the one discarded.
#[derive(Debug, Clone, Copy)]
pub struct TopMatchExclusionRanker {
    excluded: usize,
    limit: usize,
}

impl TopMatchExclusionRanker {
    pub fn new() -> Self {
        Self {
            excluded: DEFAULT_EXCLUDED,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Configure how many results are returned (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Configure how many top matches are discarded (default: 1)
    pub fn with_excluded(mut self, excluded: usize) -> Self {
        self.excluded = excluded;
        self
    }
}

impl Default for TopMatchExclusionRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for TopMatchExclusionRanker {
    fn name(&self) -> &str {
        "TopMatchExclusionRanker"
    }

    fn rank(&self, similarities: &SimilarityVector) -> Vec<ScoredDocument> {
        let mut ordered: Vec<ScoredDocument> = similarities.as_slice().to_vec();
        ordered.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.catalog_index.cmp(&a.catalog_index))
        });

        if let Some(top) = ordered.first() {
            debug!(
                "Discarding top match #{} (score {:.3})",
                top.catalog_index, top.score
            );
        }

        ordered
            .into_iter()
            .skip(self.excluded)
            .take(self.limit)
            .collect()
    }
}
