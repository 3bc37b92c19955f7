//! Error classification for failed request chains.
//!
//! After every transport strategy has failed, the recorded
//! [`FailedAttempt`](tourist_fetch_core::FailedAttempt)s are reduced to a single
//! [`ClassifiedError`]: one of a small fixed set of [`UserFacingCategory`]
//! values plus the message shown to the user.
//!
//! # Priority
//!
//! The [`PriorityClassifier`] applies these rules, first match wins:
//!
//! 1. opaque responses, cross-origin blocks, or a proxied attempt that could
//!    not reach the network => [`UserFacingCategory::CorsRestriction`]
//! 2. `401` or `403` => [`UserFacingCategory::InvalidCredentials`]
//! 3. any `5xx` => [`UserFacingCategory::ServerError`]
//! 4. a malformed body with no HTTP error => [`UserFacingCategory::DataFormatInvalid`]
//! 5. any unreachable network => [`UserFacingCategory::NetworkUnavailable`]
//! 6. otherwise [`UserFacingCategory::Unknown`]
//!
//! Browsers report cross-origin rejections as generic network failures, which
//! is why rule 1 runs ahead of the generic network bucket.
//!
//! ```rust
//! use tourist_fetch_classifier::{classify, UserFacingCategory};
//! use tourist_fetch_core::{FailedAttempt, StrategyKind, TransportFailure};
//!
//! let errors = vec![
//!     FailedAttempt::new("opaque", StrategyKind::Opaque, TransportFailure::opaque("no-cors")),
//!     FailedAttempt::new("direct", StrategyKind::Direct, TransportFailure::http(500, "boom")),
//! ];
//! assert_eq!(classify(&errors).category, UserFacingCategory::CorsRestriction);
//! ```

mod category;
mod classifier;

pub use category::{ClassifiedError, UserFacingCategory};
pub use classifier::{ErrorClassifier, FnClassifier, PriorityClassifier};

use tourist_fetch_core::FailedAttempt;

/// Classifies `errors` with the default [`PriorityClassifier`].
pub fn classify(errors: &[FailedAttempt]) -> ClassifiedError {
    PriorityClassifier.classify(errors)
}
