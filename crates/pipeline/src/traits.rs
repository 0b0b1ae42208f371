//! Core traits for the ranking stage.
//!
//! This module defines the Ranker trait that turns a similarity vector
//! into the ordered recommendation set.

use crate::similarity::{ScoredDocument, SimilarityVector};

/// Selects and orders recommendations from raw similarity scores.
///
/// ## Design Note
/// - `Send + Sync` lets one ranker serve concurrent requests
/// - Rankers borrow the scores; the output is a fresh, ordered list
pub trait Ranker: Send + Sync {
    /// Returns the name of this ranker (for logging/debugging)
    fn name(&self) -> &str;

    /// Rank the scored documents.
    ///
    /// # Returns
    /// Selected documents, highest similarity first
    fn rank(&self, similarities: &SimilarityVector) -> Vec<ScoredDocument>;
}
