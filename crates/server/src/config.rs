//! Recommender configuration.

use pipeline::ranker::{DEFAULT_EXCLUDED, DEFAULT_LIMIT};
use sources::{DEFAULT_FETCH_TIMEOUT, DEFAULT_USER_AGENT};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Number of recommendations returned per request
    pub limit: usize,
    /// Number of top matches discarded as presumed self matches
    pub excluded: usize,
    /// Deadline for each summary provider (and the HTTP client)
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// When false no external fetch is made and the catalog overview is
    /// always the query
    pub enrichment_enabled: bool,
}

impl RecommenderConfig {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            excluded: DEFAULT_EXCLUDED,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            enrichment_enabled: true,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_excluded(mut self, excluded: usize) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_enrichment(mut self, enabled: bool) -> Self {
        self.enrichment_enabled = enabled;
        self
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
