//! Server crate for the overview-similarity movie recommender.
//!
//! This crate contains the orchestrator that ties summary acquisition,
//! similarity scoring, ranking and result assembly together.

pub mod assemble;
pub mod config;
pub mod error;
pub mod orchestrator;

pub use assemble::MovieRecommendation;
pub use config::RecommenderConfig;
pub use error::RecommendError;
pub use orchestrator::{MovieRecommender, RecommendationReport};
