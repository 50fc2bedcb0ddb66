use thiserror::Error;

/// Errors surfaced to callers of the resolution service.
///
/// Only the monthly path ever returns these for upstream trouble; the daily
/// path absorbs provider failures into the built-in default.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Month outside 1..=12.
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    /// Every provider in the chain failed for a monthly request.
    #[error("all {attempts} provider(s) failed to serve the monthly timings")]
    AllProvidersFailed { attempts: usize },

    /// A provider base URL could not be parsed.
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A single provider attempt gone wrong. Recovered by the fallback chain and
/// logged, never handed to callers directly.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network failure, timeout, or non-2xx response.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response parsed as JSON but not as the expected shape, or carried
    /// values that do not make sense (unparseable times, impossible dates).
    #[error("unexpected payload: {0}")]
    Payload(String),
}
