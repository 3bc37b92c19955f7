//! Error types for request facades.

use crate::session::SessionError;
use tourist_fetch_classifier::ClassifiedError;
use tourist_fetch_transport::TransportBuildError;

/// Errors returned by [`RequestFacade::execute`](crate::RequestFacade::execute)
/// and client construction.
#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    /// Parameters were rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Every strategy failed and the feature has no placeholder.
    #[error(transparent)]
    Classified(#[from] ClassifiedError),

    /// The session store could not be read or written.
    #[error("session store error: {0}")]
    Session(#[from] SessionError),

    /// An endpoint URL could not be built from the configured base URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP strategies could not be constructed.
    #[error(transparent)]
    Transport(#[from] TransportBuildError),
}

impl FacadeError {
    /// Returns `true` if this is a classified request failure.
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Classified(_))
    }

    /// The classified error, if this is one.
    pub fn classified(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Classified(err) => Some(err),
            _ => None,
        }
    }
}
