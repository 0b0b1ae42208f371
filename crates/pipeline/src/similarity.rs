//! Similarity engine: scores every catalog overview against a query document.
//!
//! ## Algorithm
//! 1. Corpus = [query] followed by every non-empty catalog overview, in
//!    catalog order
//! 2. Fit a fresh [`TermWeightSpace`] over that corpus
//! 3. Cosine similarity between the query vector (position 0) and each
//!    overview vector (positions 1..n)

use crate::tfidf::{SparseVector, TermWeightSpace};
use data_loader::{Catalog, CatalogIndex};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, instrument};

/// Cosine similarity of two weight vectors; 0 when either has zero length.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    a.dot(b) / denom
}

/// Similarity score of one catalog overview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub catalog_index: CatalogIndex,
    pub score: f32,
}

/// One score per scored overview, in catalog order.
///
/// Records without an overview never appear here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityVector {
    scores: Vec<ScoredDocument>,
}

impl SimilarityVector {
    pub fn new(scores: Vec<ScoredDocument>) -> Self {
        Self { scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn as_slice(&self) -> &[ScoredDocument] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredDocument> {
        self.scores.iter()
    }

    /// Score of the record at `catalog_index`, if it was scored
    pub fn score_of(&self, catalog_index: CatalogIndex) -> Option<f32> {
        self.scores
            .iter()
            .find(|s| s.catalog_index == catalog_index)
            .map(|s| s.score)
    }
}

/// Stateless scorer; the term space is rebuilt on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine;

impl SimilarityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score every catalog overview against `query`.
    ///
    /// A blank query or a catalog without overviews yields an empty vector.
    #[instrument(skip_all, fields(query_len = query.len(), catalog_len = catalog.len()))]
    pub fn score(&self, query: &str, catalog: &Catalog) -> SimilarityVector {
        if query.trim().is_empty() {
            debug!("Blank query document, nothing to score");
            return SimilarityVector::default();
        }

        let documents = catalog.overview_documents();
        if documents.is_empty() {
            debug!("Catalog has no overviews, nothing to score");
            return SimilarityVector::default();
        }

        let start = Instant::now();
        let corpus: Vec<&str> = std::iter::once(query)
            .chain(documents.iter().map(|&(_, text)| text))
            .collect();
        let space = TermWeightSpace::fit(&corpus);

        let empty = SparseVector::default();
        let query_vector = space.vector(0).unwrap_or(&empty);

        let scores: Vec<ScoredDocument> = documents
            .par_iter()
            .enumerate()
            .map(|(position, &(catalog_index, _))| ScoredDocument {
                catalog_index,
                score: space
                    .vector(position + 1)
                    .map(|v| cosine_similarity(query_vector, v))
                    .unwrap_or(0.0),
            })
            .collect();

        debug!(
            "Scored {} overviews over {} terms in {:.2?}",
            scores.len(),
            space.vocabulary_len(),
            start.elapsed()
        );
        SimilarityVector::new(scores)
    }
}
