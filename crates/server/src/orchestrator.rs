//! # Recommendation Orchestrator
//!
//! This module coordinates one recommendation request:
//! 1. Validate the title
//! 2. Acquire the query document (providers, then catalog fallback)
//! 3. Score every catalog overview against it (blocking pool)
//! 4. Rank: drop the top match, keep the next N
//! 5. Assemble the response entries
//!
//! The catalog is shared read-only between requests; everything else is
//! request-local.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, instrument};

use data_loader::Catalog;
use pipeline::{Ranker, ScoredDocument, SimilarityEngine, TopMatchExclusionRanker};
use sources::{
    build_http_client, FetchError, ImdbProvider, QueryOrigin, SummaryAcquirer, WikipediaProvider,
};

use crate::assemble::{assemble, MovieRecommendation};
use crate::config::RecommenderConfig;
use crate::error::RecommendError;

/// Recommendations plus how the query was built
#[derive(Debug, Clone)]
pub struct RecommendationReport {
    /// The trimmed title that was requested
    pub title: String,
    /// `None` when no query text could be found
    pub origin: Option<QueryOrigin>,
    pub recommendations: Vec<MovieRecommendation>,
}

/// Main orchestrator that coordinates the recommendation pipeline
#[derive(Clone)]
pub struct MovieRecommender {
    catalog: Arc<Catalog>,
    acquirer: SummaryAcquirer,
    engine: SimilarityEngine,
    ranker: Arc<dyn Ranker>,
}

impl MovieRecommender {
    /// Create a recommender with the IMDb and Wikipedia providers (unless
    /// enrichment is disabled) and the default ranker.
    ///
    /// Fails only if the HTTP client cannot be built.
    pub fn new(catalog: Arc<Catalog>, config: &RecommenderConfig) -> Result<Self, FetchError> {
        let mut acquirer = SummaryAcquirer::new().with_timeout(config.fetch_timeout);

        if config.enrichment_enabled {
            let client = build_http_client(&config.user_agent, config.fetch_timeout)?;
            acquirer = acquirer
                .with_provider(ImdbProvider::new(client.clone()))
                .with_provider(WikipediaProvider::new(client));
        }

        let ranker = TopMatchExclusionRanker::new()
            .with_limit(config.limit)
            .with_excluded(config.excluded);

        Ok(Self::from_parts(catalog, acquirer, Arc::new(ranker)))
    }

    /// Assemble a recommender from explicit components
    pub fn from_parts(
        catalog: Arc<Catalog>,
        acquirer: SummaryAcquirer,
        ranker: Arc<dyn Ranker>,
    ) -> Self {
        Self {
            catalog,
            acquirer,
            engine: SimilarityEngine::new(),
            ranker,
        }
    }

    /// Main entry point: up to N movies similar to `title`, best first.
    ///
    /// A blank title is the only error; when no query text can be found the
    /// result is simply empty.
    pub async fn recommend(&self, title: &str) -> Result<Vec<MovieRecommendation>, RecommendError> {
        Ok(self.recommend_detailed(title).await?.recommendations)
    }

    /// Same as [`recommend`](Self::recommend), also reporting where the
    /// query text came from.
    #[instrument(skip(self))]
    pub async fn recommend_detailed(&self, title: &str) -> Result<RecommendationReport, RecommendError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RecommendError::MissingTitle);
        }

        let start_time = Instant::now();

        let Some(query) = self.acquirer.acquire(title, &self.catalog).await else {
            info!("No query text for {:?}, returning no recommendations", title);
            return Ok(RecommendationReport {
                title: title.to_string(),
                origin: None,
                recommendations: Vec::new(),
            });
        };
        debug!("Query document for {:?}: {}", title, query.origin);

        let ranked = self.score_and_rank(query.text).await;
        let recommendations = assemble(&self.catalog, &ranked);

        info!(
            "Recommended {} movies for {:?} in {:.2?}",
            recommendations.len(),
            title,
            start_time.elapsed()
        );

        Ok(RecommendationReport {
            title: title.to_string(),
            origin: Some(query.origin),
            recommendations,
        })
    }

    /// Score and rank on the blocking pool; a failed task yields nothing
    async fn score_and_rank(&self, query: String) -> Vec<ScoredDocument> {
        let catalog = self.catalog.clone();
        let engine = self.engine;
        let ranker = self.ranker.clone();

        let result = tokio::task::spawn_blocking(move || {
            let similarities = engine.score(&query, &catalog);
            let ranked = ranker.rank(&similarities);
            debug!(
                "{} ranked {} of {} scored overviews",
                ranker.name(),
                ranked.len(),
                similarities.len()
            );
            ranked
        })
        .await;

        match result {
            Ok(ranked) => ranked,
            Err(e) => {
                error!("Scoring task failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use data_loader::MovieRecord;
    use pipeline::SimilarityVector;
    use sources::SummaryProvider;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_test_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_records(vec![
            MovieRecord::new("The Heist", "a crew of thieves plans a bank heist in the city"),
            MovieRecord::new("Bank Job", "robbers dig a tunnel under a bank vault"),
            MovieRecord::new("Ocean Story", "a whale swims across the ocean"),
            MovieRecord::new("City Thieves", "young thieves steal cars across the city"),
            MovieRecord::new("No Plot", ""),
        ]))
    }

    struct FixedProvider(&'static str);

    #[async_trait]
    impl SummaryProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_summary(&self, _title: &str) -> Result<Option<String>, FetchError> {
            Ok(Some(self.0.to_string()))
        }
    }

    /// Ranker whose worker always panics
    struct PanickingRanker;

    impl Ranker for PanickingRanker {
        fn name(&self) -> &str {
            "PanickingRanker"
        }

        fn rank(&self, _similarities: &SimilarityVector) -> Vec<ScoredDocument> {
            panic!("ranker failure");
        }
    }

    fn offline_recommender() -> MovieRecommender {
        let config = RecommenderConfig::new().with_enrichment(false);
        MovieRecommender::new(build_test_catalog(), &config).unwrap()
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let recommender = offline_recommender();

        assert_eq!(recommender.recommend("").await, Err(RecommendError::MissingTitle));
        assert_eq!(recommender.recommend("  \n").await, Err(RecommendError::MissingTitle));
    }

    #[tokio::test]
    async fn test_catalog_fallback_excludes_self() {
        let recommender = offline_recommender();

        let report = recommender.recommend_detailed("  the heist ").await.unwrap();
        assert_eq!(report.title, "the heist");
        assert_eq!(report.origin, Some(QueryOrigin::CatalogOverview(0)));

        let titles: Vec<&str> = report.recommendations.iter().map(|r| r.title.as_str()).collect();
        // 4 records with an overview, the self match is dropped
        assert_eq!(titles.len(), 3);
        assert!(!titles.contains(&"The Heist"));
        assert!(!titles.contains(&"No Plot"));
    }

    #[tokio::test]
    async fn test_unknown_title_without_enrichment_is_empty() {
        let recommender = offline_recommender();

        let report = recommender.recommend_detailed("Nonexistent").await.unwrap();
        assert!(report.origin.is_none());
        assert!(report.recommendations.is_empty());

        // record without an overview behaves the same
        assert!(recommender.recommend("No Plot").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_enrichment_text_is_used() {
        let acquirer = SummaryAcquirer::new().with_provider(FixedProvider("whale ocean swims"));
        let recommender = MovieRecommender::from_parts(
            build_test_catalog(),
            acquirer,
            Arc::new(TopMatchExclusionRanker::new().with_excluded(0).with_limit(1)),
        );

        let report = recommender.recommend_detailed("Anything").await.unwrap();
        assert_eq!(report.origin, Some(QueryOrigin::Enrichment(vec!["fixed".to_string()])));
        assert_eq!(report.recommendations[0].title, "Ocean Story");
    }

    #[tokio::test]
    async fn test_scoring_task_failure_yields_empty() {
        let recommender = MovieRecommender::from_parts(
            build_test_catalog(),
            SummaryAcquirer::new(),
            Arc::new(PanickingRanker),
        );

        let results = recommender.recommend("The Heist").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_catalog() {
        let recommender = offline_recommender();

        let (a, b) = tokio::join!(
            recommender.recommend("Bank Job"),
            recommender.recommend("Bank Job")
        );
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
