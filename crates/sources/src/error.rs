//! Errors raised by summary providers.
//!
//! None of these ever leave the acquisition stage: the acquirer logs them
//! and treats the provider as having returned nothing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, including client-side timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The provider did not answer within the acquirer's deadline
    #[error("{provider} timed out after {millis} ms")]
    Timeout { provider: String, millis: u128 },
}
