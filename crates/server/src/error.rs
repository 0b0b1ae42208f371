use thiserror::Error;

/// Errors surfaced to the caller of a recommendation request.
///
/// Everything that goes wrong after the title has been accepted resolves to
/// an empty result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("A movie title is required")]
    MissingTitle,
}
