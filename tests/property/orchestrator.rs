//! Property tests for the strategy-chain orchestrator.
//!
//! Invariants tested:
//! - The chain stops at the first valid success
//! - Every attempted failure is recorded, in order
//! - The placeholder is used exactly when nothing succeeds

use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Runtime;
use tourist_fetch_core::{
    ExpectedShape, Platform, RequestSpec, StrategyKind, TransportFailure, TransportResult,
};
use tourist_fetch_fallback::{FallbackOrchestrator, FnStrategy};
use url::Url;

fn spec() -> RequestSpec {
    RequestSpec::get(Url::parse("http://localhost:5001/get_review_stats").unwrap())
        .expect(ExpectedShape::field("counts"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: strategies after the first valid success are never invoked
    #[test]
    fn chain_short_circuits(
        len in 1usize..=6,
        success_at in proptest::option::of(0usize..6),
    ) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let success_at = success_at.filter(|&i| i < len);
            let calls: Vec<Arc<AtomicUsize>> =
                (0..len).map(|_| Arc::new(AtomicUsize::new(0))).collect();

            let mut builder = FallbackOrchestrator::builder()
                .platform(Platform::Browser)
                .placeholder(json!({"counts": {}}));
            for (index, counter) in calls.iter().enumerate() {
                let counter = Arc::clone(counter);
                let succeeds = success_at == Some(index);
                builder = builder.strategy(FnStrategy::new(
                    format!("strategy_{index}"),
                    StrategyKind::AlternateClient,
                    move |_spec| {
                        counter.fetch_add(1, Ordering::SeqCst);
                        async move {
                            if succeeds {
                                TransportResult::Success(json!({"counts": {"positive": index}}))
                            } else {
                                TransportResult::Failure(TransportFailure::http(500, "boom"))
                            }
                        }
                    },
                ));
            }

            let outcome = builder.build().run(&spec()).await;
            let attempted = success_at.map_or(len, |i| i + 1);

            for (index, counter) in calls.iter().enumerate() {
                let expected = usize::from(index < attempted);
                prop_assert_eq!(counter.load(Ordering::SeqCst), expected);
            }
            prop_assert_eq!(outcome.used_placeholder, success_at.is_none());
            prop_assert_eq!(outcome.errors.len(), success_at.unwrap_or(len));

            let names: Vec<String> = outcome.errors.iter().map(|e| e.strategy.clone()).collect();
            let expected: Vec<String> =
                (0..outcome.errors.len()).map(|i| format!("strategy_{i}")).collect();
            prop_assert_eq!(names, expected);

            Ok(())
        })?;
    }
}
