//! IMDb summary provider.
//!
//! Two requests: the title search page, then the first result whose link
//! text contains the requested title. The summary is the text of the
//! `div.summary_text` block on that page.

use crate::error::FetchError;
use crate::provider::{element_text, get_html, selector, SummaryProvider};
use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use tracing::debug;

pub const IMDB_BASE_URL: &str = "https://www.imdb.com";

pub struct ImdbProvider {
    client: Client,
    base_url: String,
}

impl ImdbProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: IMDB_BASE_URL.to_string(),
        }
    }

    /// Point the provider at another host (default: https://www.imdb.com)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn search_url(&self, title: &str) -> String {
        format!("{}/find?q={}", self.base_url, urlencoding::encode(title))
    }

    fn page_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}

#[async_trait]
impl SummaryProvider for ImdbProvider {
    fn name(&self) -> &str {
        "imdb"
    }

    async fn fetch_summary(&self, title: &str) -> Result<Option<String>, FetchError> {
        let search_page = get_html(&self.client, &self.search_url(title)).await?;

        let Some(href) = find_title_link(&search_page, title) else {
            debug!("No IMDb search result for {:?}", title);
            return Ok(None);
        };

        let movie_page = get_html(&self.client, &self.page_url(&href)).await?;
        Ok(extract_summary(&movie_page))
    }
}

/// First `<a href>` whose text contains `title`, ignoring case
pub fn find_title_link(html: &str, title: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let wanted = title.to_lowercase();
    let links = selector("a[href]");

    document
        .select(&links)
        .find(|a| element_text(*a).to_lowercase().contains(&wanted))
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// Text of the first `div.summary_text`, if present and non-empty
pub fn extract_summary(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let summary = selector("div.summary_text");

    document
        .select(&summary)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
          <a href="/">Home</a>
          <a href="/title/tt0000001/">Heat Wave</a>
          <a href="/title/tt0113277/?ref_=fn_al_tt_1">Heat</a>
        </body></html>"#;

    const MOVIE_PAGE: &str = r#"
        <html><body>
          <div class="summary_text">
             A group of professional bank robbers start to feel the heat
             from police.
          </div>
        </body></html>"#;

    #[test]
    fn test_find_title_link_picks_first_containing_match() {
        assert_eq!(
            find_title_link(SEARCH_PAGE, "heat").as_deref(),
            Some("/title/tt0000001/")
        );
        assert!(find_title_link(SEARCH_PAGE, "Ronin").is_none());
    }

    #[test]
    fn test_extract_summary() {
        assert_eq!(
            extract_summary(MOVIE_PAGE).as_deref(),
            Some("A group of professional bank robbers start to feel the heat from police.")
        );
        assert!(extract_summary("<div class=\"summary_text\">  </div>").is_none());
        assert!(extract_summary("<p>no summary here</p>").is_none());
    }

    #[test]
    fn test_urls() {
        let client = Client::new();
        let provider = ImdbProvider::new(client).with_base_url("http://localhost:9000/");

        assert_eq!(provider.search_url("Heat & Dust"), "http://localhost:9000/find?q=Heat%20%26%20Dust");
        assert_eq!(provider.page_url("/title/tt1/"), "http://localhost:9000/title/tt1/");
        assert_eq!(provider.page_url("https://m.imdb.com/x"), "https://m.imdb.com/x");
    }
}
