//! Error types for building transport strategies.

/// Errors raised while constructing HTTP strategies.
///
/// Attempts themselves never fail this way; they report
/// [`TransportResult::Failure`](tourist_fetch_core::TransportResult::Failure).
#[derive(Debug, thiserror::Error)]
pub enum TransportBuildError {
    /// The HTTP client could not be built (TLS backend, invalid settings).
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
