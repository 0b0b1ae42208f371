//! Wikipedia summary provider.
//!
//! The article is addressed directly by title (spaces become underscores).
//! The summary is the first non-empty paragraph of the article body.

use crate::error::FetchError;
use crate::provider::{element_text, get_html, selector, SummaryProvider};
use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;

pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org";

pub struct WikipediaProvider {
    client: Client,
    base_url: String,
}

impl WikipediaProvider {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: WIKIPEDIA_BASE_URL.to_string(),
        }
    }

    /// Point the provider at another host (default: https://en.wikipedia.org)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn article_url(&self, title: &str) -> String {
        let slug = title.trim().replace(' ', "_");
        format!("{}/wiki/{}", self.base_url, urlencoding::encode(&slug))
    }
}

#[async_trait]
impl SummaryProvider for WikipediaProvider {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn fetch_summary(&self, title: &str) -> Result<Option<String>, FetchError> {
        let page = get_html(&self.client, &self.article_url(title)).await?;
        Ok(extract_first_paragraph(&page))
    }
}

/// First paragraph with text inside `div.mw-parser-output`
pub fn extract_first_paragraph(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let paragraphs = selector("div.mw-parser-output p");

    document
        .select(&paragraphs)
        .map(element_text)
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_empty_paragraphs() {
        let html = r#"
            <p>Outside the article</p>
            <div class="mw-parser-output">
              <p class="mw-empty-elt">
              </p>
              <p><b>Heat</b> is a 1995 American crime film.</p>
              <p>Second paragraph.</p>
            </div>"#;

        assert_eq!(
            extract_first_paragraph(html).as_deref(),
            Some("Heat is a 1995 American crime film.")
        );
    }

    #[test]
    fn test_missing_body() {
        assert!(extract_first_paragraph("<html><p>Not an article</p></html>").is_none());
    }

    #[test]
    fn test_article_url() {
        let provider = WikipediaProvider::new(Client::new()).with_base_url("http://wiki.local");
        assert_eq!(
            provider.article_url("The Dark Knight"),
            "http://wiki.local/wiki/The_Dark_Knight"
        );
        assert_eq!(
            provider.article_url("Amélie"),
            "http://wiki.local/wiki/Am%C3%A9lie"
        );
    }
}
