//! Tests for tourist-fetch-fallback, organized into:
//!
//! - **scenarios**: end-to-end chain behavior with call-count assertions
//! - **platform**: execution-context gating
//! - **events**: listener notifications


use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tourist_fetch_core::{RequestSpec, StrategyKind, TransportResult};
use tourist_fetch_fallback::FnStrategy;
use url::Url;

/// A strategy that always returns `result` and counts its invocations.
pub fn counted(name: &str, kind: StrategyKind, result: TransportResult) -> (FnStrategy, Calls) {
    let calls = Calls::default();
    let counter = calls.clone();
    let strategy = FnStrategy::new(name, kind, move |_spec| {
        counter.hit();
        let result = result.clone();
        async move { result }
    });
    (strategy, calls)
}

/// Shared invocation counter.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn endpoint(path: &str) -> Url {
    Url::parse("http://localhost:5001/")
        .unwrap()
        .join(path)
        .unwrap()
}

pub fn review_stats_spec() -> RequestSpec {
    RequestSpec::get(endpoint("get_review_stats"))
        .query("hotel_name", "Grand Plaza Hotel")
        .expect(tourist_fetch_core::ExpectedShape::field("counts"))
}

pub fn counts(positive: u64, neutral: u64, negative: u64) -> Value {
    serde_json::json!({
        "counts": {"positive": positive, "neutral": neutral, "negative": negative}
    })
}
