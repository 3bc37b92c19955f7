//! Outcomes of a single transport attempt.

use serde_json::Value;
use std::fmt;

/// Why a single transport attempt did not produce usable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportFailureKind {
    /// The remote could not be reached (connect error, timeout, proxy refusal).
    NetworkUnreachable,
    /// The request was rejected by cross-origin enforcement.
    CorsBlocked,
    /// The request completed but its body may not be read.
    OpaqueResponse,
    /// The remote answered with a non-success status.
    HttpError(u16),
    /// The body could not be decoded, or decoded to an unexpected shape.
    MalformedBody,
    /// A strategy misbehaved (panicked) instead of reporting a failure.
    Unknown,
}

impl TransportFailureKind {
    /// Returns the HTTP status for [`HttpError`](Self::HttpError) failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError(status) => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for authentication or authorization rejections (401, 403).
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::HttpError(401 | 403))
    }

    /// Returns `true` for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::HttpError(500..=599))
    }
}

impl fmt::Display for TransportFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkUnreachable => f.write_str("network unreachable"),
            Self::CorsBlocked => f.write_str("blocked by cross-origin policy"),
            Self::OpaqueResponse => f.write_str("opaque response"),
            Self::HttpError(status) => write!(f, "http error {}", status),
            Self::MalformedBody => f.write_str("malformed body"),
            Self::Unknown => f.write_str("unknown failure"),
        }
    }
}

/// A failed transport attempt with a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct TransportFailure {
    /// The failure category.
    pub kind: TransportFailureKind,
    /// Diagnostic detail, never shown to end users directly.
    pub detail: String,
}

impl TransportFailure {
    /// Creates a failure of the given kind.
    pub fn new(kind: TransportFailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Shorthand for a [`TransportFailureKind::NetworkUnreachable`] failure.
    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self::new(TransportFailureKind::NetworkUnreachable, detail)
    }

    /// Shorthand for a [`TransportFailureKind::HttpError`] failure.
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self::new(TransportFailureKind::HttpError(status), detail)
    }

    /// Shorthand for a [`TransportFailureKind::MalformedBody`] failure.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::new(TransportFailureKind::MalformedBody, detail)
    }

    /// Shorthand for a [`TransportFailureKind::OpaqueResponse`] failure.
    pub fn opaque(detail: impl Into<String>) -> Self {
        Self::new(TransportFailureKind::OpaqueResponse, detail)
    }
}

/// Result of one transport attempt. Strategies return this instead of raising.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportResult {
    /// The attempt produced a decoded JSON payload.
    Success(Value),
    /// The attempt failed.
    Failure(TransportFailure),
}

impl TransportResult {
    /// Returns `true` if the attempt produced a payload.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<Value, TransportFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl From<Result<Value, TransportFailure>> for TransportResult {
    fn from(result: Result<Value, TransportFailure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}
