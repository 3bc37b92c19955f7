//! Classifier trait and implementations.

use crate::category::{ClassifiedError, UserFacingCategory};
use std::sync::Arc;
use tourist_fetch_core::{FailedAttempt, StrategyKind, TransportFailureKind};

/// Reduces the failed attempts of one logical request to a [`ClassifiedError`].
///
/// Implementations must be deterministic: the same multiset of attempts always
/// yields the same category.
pub trait ErrorClassifier: Send + Sync {
    /// Classifies the recorded failures.
    fn classify(&self, errors: &[FailedAttempt]) -> ClassifiedError;
}

/// The default priority-ordered classifier.
///
/// See the [crate-level documentation](crate) for the rule order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityClassifier;

impl PriorityClassifier {
    fn category(errors: &[FailedAttempt]) -> UserFacingCategory {
        let any = |pred: fn(&FailedAttempt) -> bool| errors.iter().any(pred);

        if any(is_cross_origin) {
            return UserFacingCategory::CorsRestriction;
        }
        if any(|a| a.kind().is_auth_rejection()) {
            return UserFacingCategory::InvalidCredentials;
        }
        if any(|a| a.kind().is_server_error()) {
            return UserFacingCategory::ServerError;
        }
        if any(|a| a.kind() == TransportFailureKind::MalformedBody)
            && !any(|a| a.kind().status().is_some())
        {
            return UserFacingCategory::DataFormatInvalid;
        }
        if any(|a| a.kind() == TransportFailureKind::NetworkUnreachable) {
            return UserFacingCategory::NetworkUnavailable;
        }
        UserFacingCategory::Unknown
    }
}

fn is_cross_origin(attempt: &FailedAttempt) -> bool {
    match attempt.kind() {
        TransportFailureKind::OpaqueResponse | TransportFailureKind::CorsBlocked => true,
        TransportFailureKind::NetworkUnreachable => {
            attempt.strategy_kind == StrategyKind::Proxied
        }
        _ => false,
    }
}

impl ErrorClassifier for PriorityClassifier {
    fn classify(&self, errors: &[FailedAttempt]) -> ClassifiedError {
        ClassifiedError::new(Self::category(errors))
    }
}

/// A classifier backed by a closure.
///
/// ```rust
/// use tourist_fetch_classifier::{ClassifiedError, ErrorClassifier, FnClassifier, UserFacingCategory};
///
/// let classifier = FnClassifier::new(|errors: &[tourist_fetch_core::FailedAttempt]| {
///     if errors.is_empty() {
///         ClassifiedError::new(UserFacingCategory::Unknown)
///     } else {
///         ClassifiedError::new(UserFacingCategory::ServerError)
///     }
/// });
/// assert_eq!(classifier.classify(&[]).category, UserFacingCategory::Unknown);
/// ```
#[derive(Clone)]
pub struct FnClassifier<F> {
    f: Arc<F>,
}

impl<F> FnClassifier<F>
where
    F: Fn(&[FailedAttempt]) -> ClassifiedError + Send + Sync,
{
    /// Wraps `f` as a classifier.
    pub fn new(f: F) -> Self {
        Self { f: Arc::new(f) }
    }
}

impl<F> ErrorClassifier for FnClassifier<F>
where
    F: Fn(&[FailedAttempt]) -> ClassifiedError + Send + Sync,
{
    fn classify(&self, errors: &[FailedAttempt]) -> ClassifiedError {
        (self.f)(errors)
    }
}

impl<F> std::fmt::Debug for FnClassifier<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnClassifier")
            .field("f", &"<closure>")
            .finish()
    }
}
