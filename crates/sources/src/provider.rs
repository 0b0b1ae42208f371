//! The SummaryProvider trait and helpers shared by the HTTP providers.

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::{redirect, Client};
use scraper::{ElementRef, Selector};
use std::time::Duration;

/// Default User-Agent for outbound page fetches
pub const DEFAULT_USER_AGENT: &str = "movie-recs/0.1 (+https://github.com/movie-recs)";

/// A best-effort source of plot text keyed by movie title.
///
/// `Ok(None)` means the source has nothing for this title. Errors are
/// reported but never fatal; the acquirer downgrades them to `None`.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Returns the name of this provider (for logging/debugging)
    fn name(&self) -> &str;

    /// Fetch a summary for `title`
    async fn fetch_summary(&self, title: &str) -> Result<Option<String>, FetchError>;
}

/// Build the HTTP client shared by the page-scraping providers
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(user_agent)
        .redirect(redirect::Policy::limited(5))
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// GET `url` and return the body, failing on non-success statuses
pub(crate) async fn get_html(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

/// Parse a selector that is a compile-time constant
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Visible text of an element with runs of whitespace collapsed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    collapse_whitespace(&raw)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
