//! Orchestrator metrics regression tests

use super::helpers::*;
use serde_json::json;
use serial_test::serial;
use tourist_fetch_core::{
    ExpectedShape, Platform, RequestSpec, StrategyKind, TransportFailure, TransportResult,
};
use tourist_fetch_fallback::{FallbackOrchestrator, FnStrategy};
use url::Url;

fn spec() -> RequestSpec {
    RequestSpec::get(Url::parse("http://localhost:5001/get_review_stats").unwrap())
        .expect(ExpectedShape::field("counts"))
}

#[tokio::test]
#[serial]
async fn attempt_and_outcome_metrics_exist() {
    init_recorder();

    let orchestrator = FallbackOrchestrator::builder()
        .name("metrics_live")
        .platform(Platform::Browser)
        .strategy(FnStrategy::new("direct", StrategyKind::Direct, |_| async {
            TransportResult::Failure(TransportFailure::http(500, "boom"))
        }))
        .strategy(FnStrategy::new(
            "alternate_client",
            StrategyKind::AlternateClient,
            |_| async { TransportResult::Success(json!({"counts": {}})) },
        ))
        .build();

    orchestrator.run(&spec()).await;

    assert_counter_exists("fetch_attempts_total");
    assert_metric_has_label("fetch_attempts_total", "orchestrator", "metrics_live");
    assert_metric_has_label("fetch_attempts_total", "strategy", "direct");
    assert_metric_has_label("fetch_attempts_total", "result", "failure");
    assert_metric_has_label("fetch_attempts_total", "strategy", "alternate_client");
    assert_metric_has_label("fetch_attempts_total", "result", "success");

    assert_counter_exists("fetch_outcomes_total");
    assert_metric_has_label("fetch_outcomes_total", "result", "live");
}

#[tokio::test]
#[serial]
async fn placeholder_outcome_metric() {
    init_recorder();

    let orchestrator = FallbackOrchestrator::builder()
        .name("metrics_placeholder")
        .strategy(FnStrategy::new("direct", StrategyKind::Direct, |_| async {
            TransportResult::Failure(TransportFailure::unreachable("offline"))
        }))
        .placeholder(json!({"counts": {}}))
        .build();

    orchestrator.run(&spec()).await;

    assert_metric_has_label("fetch_outcomes_total", "orchestrator", "metrics_placeholder");
    assert_metric_has_label("fetch_outcomes_total", "result", "placeholder");
}
