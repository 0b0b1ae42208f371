//! Similarity scoring and ranking of catalog overviews.
//!
//! This crate provides:
//! - A tokenizer with English stop-word removal
//! - A TF-IDF term weight space fitted per request
//! - The SimilarityEngine, scoring a query against every catalog overview
//! - The Ranker trait and the default self-match-excluding ranker
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Ranker, SimilarityEngine, TopMatchExclusionRanker};
//!
//! let scores = SimilarityEngine::new().score(&query, &catalog);
//! let ranked = TopMatchExclusionRanker::new().rank(&scores);
//! ```

pub mod tokenizer;
pub mod tfidf;
pub mod similarity;
pub mod traits;
pub mod ranker;

// Re-export main types
pub use ranker::TopMatchExclusionRanker;
pub use similarity::{cosine_similarity, ScoredDocument, SimilarityEngine, SimilarityVector};
pub use tfidf::{SparseVector, TermWeightSpace};
pub use traits::Ranker;
