//! Property-based tests for tourist-fetch.
//!
//! Run with: cargo test --test property_tests
//!
//! These tests use proptest to generate random failure sets and strategy
//! chains and verify that the classification and short-circuit invariants
//! hold for all of them.

pub mod classifier;
pub mod orchestrator;

use proptest::prelude::*;
use tourist_fetch_core::{FailedAttempt, StrategyKind, TransportFailure, TransportFailureKind};

pub fn failure_kind() -> impl Strategy<Value = TransportFailureKind> {
    prop_oneof![
        Just(TransportFailureKind::NetworkUnreachable),
        Just(TransportFailureKind::CorsBlocked),
        Just(TransportFailureKind::OpaqueResponse),
        (100u16..600).prop_map(TransportFailureKind::HttpError),
        Just(TransportFailureKind::MalformedBody),
        Just(TransportFailureKind::Unknown),
    ]
}

pub fn strategy_kind() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![
        Just(StrategyKind::Direct),
        Just(StrategyKind::Proxied),
        Just(StrategyKind::AlternateClient),
        Just(StrategyKind::Opaque),
    ]
}

pub fn attempt() -> impl Strategy<Value = FailedAttempt> {
    (strategy_kind(), failure_kind()).prop_map(|(strategy_kind, kind)| {
        FailedAttempt::new(
            strategy_kind.as_str(),
            strategy_kind,
            TransportFailure::new(kind, "generated"),
        )
    })
}
