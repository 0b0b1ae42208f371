//! # Sources Crate
//!
//! This crate builds the query document a recommendation is computed from.
//!
//! ## Components
//!
//! ### Summary providers
//! Best-effort plot text keyed by title:
//! - `ImdbProvider`: search page, then the matching title page's summary
//! - `WikipediaProvider`: first paragraph of the article named after the title
//!
//! ### SummaryAcquirer
//! Runs the providers in order with a deadline each, concatenates what came
//! back and falls back to the catalog's own overview when nothing did.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{build_http_client, ImdbProvider, SummaryAcquirer, WikipediaProvider};
//!
//! let client = build_http_client(DEFAULT_USER_AGENT, Duration::from_secs(10))?;
//! let acquirer = SummaryAcquirer::new()
//!     .with_provider(ImdbProvider::new(client.clone()))
//!     .with_provider(WikipediaProvider::new(client));
//!
//! if let Some(query) = acquirer.acquire("Heat", &catalog).await {
//!     println!("{}: {}", query.origin, query.text);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod provider;
pub mod imdb;
pub mod wikipedia;
pub mod acquirer;

// Re-export commonly used types
pub use acquirer::{SummaryAcquirer, DEFAULT_FETCH_TIMEOUT};
pub use error::FetchError;
pub use imdb::ImdbProvider;
pub use provider::{build_http_client, SummaryProvider, DEFAULT_USER_AGENT};
pub use types::{QueryDocument, QueryOrigin};
pub use wikipedia::WikipediaProvider;
