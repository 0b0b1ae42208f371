//! Query document types.

use data_loader::CatalogIndex;
use std::fmt;

/// Where the text of a query document came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOrigin {
    /// Fetched summaries; provider names in concatenation order
    Enrichment(Vec<String>),
    /// The overview of the catalog record with the requested title
    CatalogOverview(CatalogIndex),
}

impl fmt::Display for QueryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOrigin::Enrichment(providers) => write!(f, "fetched from {}", providers.join(" + ")),
            QueryOrigin::CatalogOverview(index) => write!(f, "catalog overview of #{}", index),
        }
    }
}

/// Text the catalog overviews are compared against.
///
/// Never blank: the acquirer returns `None` instead of building an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDocument {
    pub text: String,
    pub origin: QueryOrigin,
}

impl QueryDocument {
    /// Build a query document, or `None` if `text` is blank
    pub fn new(text: impl Into<String>, origin: QueryOrigin) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text, origin })
        }
    }
}
