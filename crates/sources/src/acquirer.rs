//! Query document acquisition.
//!
//! ## Algorithm
//! 1. Ask every provider for a summary, in registration order, each bounded
//!    by the acquirer's timeout
//! 2. Concatenate the summaries that came back, each followed by a space
//! 3. If nothing usable came back, fall back to the overview of the catalog
//!    record whose title matches exactly (ignoring case)
//! 4. If that is missing or blank too, there is no query document

use crate::error::FetchError;
use crate::provider::SummaryProvider;
use crate::types::{QueryDocument, QueryOrigin};
use data_loader::Catalog;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default per-provider deadline
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the query document for a title from the registered providers,
/// falling back to the catalog.
#[derive(Clone)]
pub struct SummaryAcquirer {
    providers: Vec<Arc<dyn SummaryProvider>>,
    timeout: Duration,
}

impl SummaryAcquirer {
    /// An acquirer with no providers; it only ever uses the catalog fallback
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Register a provider (builder pattern). Fragments are concatenated in
    /// registration order.
    pub fn with_provider(mut self, provider: impl SummaryProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Configure the per-provider deadline (default: 10s)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the query document for `title`, or `None` if no usable text
    /// exists anywhere.
    #[instrument(skip(self, catalog))]
    pub async fn acquire(&self, title: &str, catalog: &Catalog) -> Option<QueryDocument> {
        let fragments = self.fetch_fragments(title).await;

        let mut text = String::new();
        let mut contributors = Vec::with_capacity(fragments.len());
        for (provider, fragment) in fragments {
            text.push_str(&fragment);
            text.push(' ');
            contributors.push(provider);
        }

        if let Some(document) = QueryDocument::new(text, QueryOrigin::Enrichment(contributors)) {
            debug!("Using fetched summaries ({} chars)", document.text.len());
            return Some(document);
        }

        let fallback = catalog.find_by_title(title).and_then(|(index, record)| {
            QueryDocument::new(record.overview.clone(), QueryOrigin::CatalogOverview(index))
        });

        match &fallback {
            Some(document) => debug!("Falling back to {}", document.origin),
            None => info!("No valid summary for {:?}", title),
        }
        fallback
    }

    /// Non-blank summaries from each provider, in registration order.
    /// Failures are logged and skipped.
    pub async fn fetch_fragments(&self, title: &str) -> Vec<(String, String)> {
        let mut fragments = Vec::new();

        for provider in &self.providers {
            let name = provider.name().to_string();
            let result = match tokio::time::timeout(self.timeout, provider.fetch_summary(title)).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout {
                    provider: name.clone(),
                    millis: self.timeout.as_millis(),
                }),
            };

            match result {
                Ok(Some(text)) if !text.trim().is_empty() => {
                    debug!("{} returned {} chars", name, text.len());
                    fragments.push((name, text.trim().to_string()));
                }
                Ok(_) => debug!("{} has no summary for {:?}", name, title),
                Err(e) => warn!("Error fetching summary from {}: {}", name, e),
            }
        }

        fragments
    }
}

impl Default for SummaryAcquirer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use data_loader::MovieRecord;

    struct FixedProvider(&'static str, Option<&'static str>);

    #[async_trait]
    impl SummaryProvider for FixedProvider {
        fn name(&self) -> &str {
            self.0
        }

        async fn fetch_summary(&self, _title: &str) -> Result<Option<String>, FetchError> {
            Ok(self.1.map(str::to_string))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SummaryProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_summary(&self, title: &str) -> Result<Option<String>, FetchError> {
            Err(FetchError::Status {
                url: format!("http://example.invalid/{title}"),
                status: 503,
            })
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl SummaryProvider for SlowProvider {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch_summary(&self, _title: &str) -> Result<Option<String>, FetchError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Some("too late".to_string()))
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new("Heat", "A thief and a detective in Los Angeles."),
            MovieRecord::new("Silent", ""),
        ])
    }

    #[tokio::test]
    async fn test_concatenates_in_provider_order() {
        let acquirer = SummaryAcquirer::new()
            .with_provider(FixedProvider("imdb", Some(" first part ")))
            .with_provider(FixedProvider("wikipedia", Some("second part")));

        let document = acquirer.acquire("Heat", &catalog()).await.unwrap();
        assert_eq!(document.text, "first part second part ");
        assert_eq!(
            document.origin,
            QueryOrigin::Enrichment(vec!["imdb".to_string(), "wikipedia".to_string()])
        );
    }

    #[tokio::test]
    async fn test_one_provider_failing_keeps_the_other() {
        let acquirer = SummaryAcquirer::new()
            .with_provider(FailingProvider)
            .with_provider(FixedProvider("wikipedia", Some("crime saga")));

        let document = acquirer.acquire("Heat", &catalog()).await.unwrap();
        assert_eq!(document.text, "crime saga ");
    }

    #[tokio::test]
    async fn test_falls_back_to_catalog_overview() {
        let acquirer = SummaryAcquirer::new()
            .with_provider(FailingProvider)
            .with_provider(FixedProvider("blank", Some("   ")))
            .with_provider(FixedProvider("none", None));

        let document = acquirer.acquire("HEAT", &catalog()).await.unwrap();
        assert_eq!(document.text, "A thief and a detective in Los Angeles.");
        assert_eq!(document.origin, QueryOrigin::CatalogOverview(0));
    }

    #[tokio::test]
    async fn test_timeout_counts_as_absent() {
        let acquirer = SummaryAcquirer::new()
            .with_provider(SlowProvider)
            .with_timeout(Duration::from_millis(20));

        let document = acquirer.acquire("Heat", &catalog()).await.unwrap();
        assert_eq!(document.origin, QueryOrigin::CatalogOverview(0));
    }

    #[tokio::test]
    async fn test_no_text_anywhere() {
        let acquirer = SummaryAcquirer::new();

        assert!(acquirer.acquire("Unknown Film", &catalog()).await.is_none());
        // title exists but has no overview
        assert!(acquirer.acquire("Silent", &catalog()).await.is_none());
    }
}
