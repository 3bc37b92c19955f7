//! Property tests for error classification.
//!
//! Invariants tested:
//! - Classification is deterministic
//! - Classification ignores attempt order
//! - Cross-origin evidence outranks every other failure
//! - Auth rejections outrank server errors

use super::attempt;
use proptest::prelude::*;
use tourist_fetch_classifier::{UserFacingCategory, classify};
use tourist_fetch_core::{FailedAttempt, StrategyKind, TransportFailure};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the same input always yields the same category and message
    #[test]
    fn classification_is_deterministic(errors in prop::collection::vec(attempt(), 0..8)) {
        let first = classify(&errors);
        let second = classify(&errors.clone());
        prop_assert_eq!(first, second);
    }

    /// Property: any permutation of the attempts yields the same category
    #[test]
    fn classification_ignores_order(
        (errors, shuffled) in prop::collection::vec(attempt(), 0..8)
            .prop_flat_map(|errors| (Just(errors.clone()), Just(errors).prop_shuffle()))
    ) {
        prop_assert_eq!(classify(&errors).category, classify(&shuffled).category);
    }

    /// Property: an opaque response always means a cross-origin restriction
    #[test]
    fn opaque_response_wins(
        errors in prop::collection::vec(attempt(), 0..8),
        position in 0usize..8,
    ) {
        let mut errors = errors;
        let at = position.min(errors.len());
        errors.insert(
            at,
            FailedAttempt::new("opaque", StrategyKind::Opaque, TransportFailure::opaque("no-cors")),
        );
        prop_assert_eq!(classify(&errors).category, UserFacingCategory::CorsRestriction);
    }

    /// Property: without cross-origin evidence, 401/403 beats any 5xx
    #[test]
    fn auth_rejection_beats_server_error(
        status in prop_oneof![Just(401u16), Just(403u16)],
        server_status in 500u16..600,
    ) {
        let errors = vec![
            FailedAttempt::new("direct", StrategyKind::Direct, TransportFailure::http(server_status, "boom")),
            FailedAttempt::new("alternate_client", StrategyKind::AlternateClient, TransportFailure::http(status, "denied")),
        ];
        prop_assert_eq!(classify(&errors).category, UserFacingCategory::InvalidCredentials);
    }
}
