//! Ordered transport-strategy fallback.
//!
//! A [`FallbackOrchestrator`] runs an ordered chain of [`TransportStrategy`]s
//! for one logical request, stopping at the first strategy whose payload has
//! the request's expected shape. When every strategy fails, the caller's
//! placeholder payload is returned instead, flagged with
//! `used_placeholder = true` and the full list of failed attempts.
//!
//! # Overview
//!
//! ```rust
//! use serde_json::json;
//! use tourist_fetch_core::{ExpectedShape, Platform, RequestSpec, StrategyKind, TransportFailure, TransportResult};
//! use tourist_fetch_fallback::{FallbackOrchestrator, FnStrategy};
//! use url::Url;
//!
//! # async fn example() {
//! let orchestrator = FallbackOrchestrator::builder()
//!     .name("review-stats")
//!     .platform(Platform::Browser)
//!     .strategy(FnStrategy::new("direct", StrategyKind::Direct, |_spec| async {
//!         TransportResult::Failure(TransportFailure::unreachable("connection refused"))
//!     }))
//!     .strategy(FnStrategy::new("alternate", StrategyKind::AlternateClient, |_spec| async {
//!         TransportResult::Success(json!({"counts": {"positive": 1, "neutral": 0, "negative": 0}}))
//!     }))
//!     .placeholder(json!({"counts": {"positive": 0, "neutral": 0, "negative": 0}}))
//!     .build();
//!
//! let spec = RequestSpec::get(Url::parse("http://localhost:5001/get_review_stats").unwrap())
//!     .expect(ExpectedShape::field("counts"));
//! let outcome = orchestrator.run(&spec).await;
//!
//! assert!(!outcome.used_placeholder);
//! assert_eq!(outcome.errors.len(), 1);
//! # }
//! ```
//!
//! # Execution context
//!
//! The injected [`ExecutionContext`](tourist_fetch_core::ExecutionContext) is
//! consulted once per run. On native hosts only
//! [`StrategyKind::Direct`](tourist_fetch_core::StrategyKind::Direct)
//! strategies are attempted; the others exist to route around browser-only
//! cross-origin restrictions.
//!
//! # Misbehaving strategies
//!
//! A strategy that panics is caught at the orchestrator boundary and recorded
//! as a [`TransportFailureKind::Unknown`] failure; the chain continues.
//!
//! # Events
//!
//! - `AttemptSucceeded`: a strategy produced a valid payload
//! - `AttemptFailed`: a strategy failed or produced the wrong shape
//! - `StrategySkipped`: a strategy does not run on this platform
//! - `PlaceholderApplied`: every attempt failed

mod config;
mod events;
mod outcome;
mod strategy;

pub use config::{FallbackConfig, FallbackConfigBuilder};
pub use events::OrchestratorEvent;
pub use outcome::FallbackOutcome;
pub use strategy::{BoxedStrategy, FnStrategy, ServiceStrategy, TransportStrategy};

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use std::any::Any;
use std::convert::Infallible;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;
use tourist_fetch_core::{
    FailedAttempt, RequestSpec, TransportFailure, TransportFailureKind, TransportResult,
};
use tower::Service;

#[cfg(feature = "metrics")]
use metrics::{counter, describe_counter};

#[cfg(feature = "metrics")]
use std::sync::Once;

#[cfg(feature = "metrics")]
static METRICS_INIT: Once = Once::new();

/// Runs strategy chains with placeholder substitution.
///
/// Cloning is cheap; clones share configuration. See the
/// [crate-level documentation](crate) for usage.
#[derive(Clone)]
pub struct FallbackOrchestrator {
    config: Arc<FallbackConfig>,
}

impl FallbackOrchestrator {
    pub(crate) fn new(config: FallbackConfig) -> Self {
        #[cfg(feature = "metrics")]
        METRICS_INIT.call_once(|| {
            describe_counter!(
                "fetch_attempts_total",
                "Total number of transport strategy attempts"
            );
            describe_counter!(
                "fetch_outcomes_total",
                "Total number of logical requests by outcome"
            );
        });

        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a builder.
    pub fn builder() -> FallbackConfigBuilder {
        FallbackConfigBuilder::new()
    }

    /// The orchestrator's configuration.
    pub fn config(&self) -> &FallbackConfig {
        &self.config
    }

    /// Runs the configured chain with the configured placeholder.
    pub async fn run(&self, spec: &RequestSpec) -> FallbackOutcome {
        self.run_chain(spec, &self.config.strategies, self.config.placeholder.clone())
            .await
    }

    /// Runs the configured chain with a per-call placeholder.
    pub async fn run_with_placeholder(
        &self,
        spec: &RequestSpec,
        placeholder: Value,
    ) -> FallbackOutcome {
        self.run_chain(spec, &self.config.strategies, placeholder)
            .await
    }

    /// Runs `strategies` in order for `spec`.
    ///
    /// Returns on the first payload accepted by the request's expected shape. A
    /// payload of the wrong shape is recorded as
    /// [`TransportFailureKind::MalformedBody`] and the chain continues. If
    /// nothing succeeds, `placeholder` is returned with every failed attempt.
    pub async fn run_chain(
        &self,
        spec: &RequestSpec,
        strategies: &[BoxedStrategy],
        placeholder: Value,
    ) -> FallbackOutcome {
        let config = &self.config;
        let platform = config.context.platform();
        let mut errors = Vec::new();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            orchestrator = %config.name,
            %platform,
            url = %spec.endpoint(),
            "Running strategy chain"
        );

        for strategy in strategies {
            let kind = strategy.kind();
            if !kind.runs_on(platform) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    orchestrator = %config.name,
                    strategy = strategy.name(),
                    %platform,
                    "Strategy does not run on this platform"
                );

                config.event_listeners.emit(&OrchestratorEvent::StrategySkipped {
                    pattern_name: config.name.clone(),
                    timestamp: Instant::now(),
                    strategy: strategy.name().to_string(),
                    strategy_kind: kind,
                });
                continue;
            }

            let failure = match attempt_guarded(strategy.as_ref(), spec).await {
                TransportResult::Success(payload) if spec.accepts(&payload) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        orchestrator = %config.name,
                        strategy = strategy.name(),
                        "Strategy succeeded"
                    );

                    #[cfg(feature = "metrics")]
                    {
                        counter!(
                            "fetch_attempts_total",
                            "orchestrator" => config.name.clone(),
                            "strategy" => strategy.name().to_string(),
                            "result" => "success"
                        )
                        .increment(1);
                        counter!(
                            "fetch_outcomes_total",
                            "orchestrator" => config.name.clone(),
                            "result" => "live"
                        )
                        .increment(1);
                    }

                    config.event_listeners.emit(&OrchestratorEvent::AttemptSucceeded {
                        pattern_name: config.name.clone(),
                        timestamp: Instant::now(),
                        strategy: strategy.name().to_string(),
                        strategy_kind: kind,
                    });

                    return FallbackOutcome::live(payload, errors);
                }
                TransportResult::Success(_) => TransportFailure::malformed(format!(
                    "response does not match expected shape {:?}",
                    spec.expected_shape()
                )),
                TransportResult::Failure(failure) => failure,
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                orchestrator = %config.name,
                strategy = strategy.name(),
                failure = %failure,
                "Strategy failed"
            );

            #[cfg(feature = "metrics")]
            counter!(
                "fetch_attempts_total",
                "orchestrator" => config.name.clone(),
                "strategy" => strategy.name().to_string(),
                "result" => "failure"
            )
            .increment(1);

            config.event_listeners.emit(&OrchestratorEvent::AttemptFailed {
                pattern_name: config.name.clone(),
                timestamp: Instant::now(),
                strategy: strategy.name().to_string(),
                strategy_kind: kind,
                failure: failure.kind,
            });

            errors.push(FailedAttempt::new(strategy.name(), kind, failure));
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            orchestrator = %config.name,
            failed_attempts = errors.len(),
            "All strategies failed, using placeholder"
        );

        #[cfg(feature = "metrics")]
        counter!(
            "fetch_outcomes_total",
            "orchestrator" => config.name.clone(),
            "result" => "placeholder"
        )
        .increment(1);

        config
            .event_listeners
            .emit(&OrchestratorEvent::PlaceholderApplied {
                pattern_name: config.name.clone(),
                timestamp: Instant::now(),
                failed_attempts: errors.len(),
            });

        FallbackOutcome::placeholder(placeholder, errors)
    }
}

/// Runs one attempt, converting a panic (while building or polling the
/// future) into an `Unknown` failure.
async fn attempt_guarded(strategy: &dyn TransportStrategy, spec: &RequestSpec) -> TransportResult {
    let future = match std::panic::catch_unwind(AssertUnwindSafe(|| strategy.attempt(spec))) {
        Ok(future) => future,
        Err(panic) => return panicked(strategy, panic),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => panicked(strategy, panic),
    }
}

fn panicked(strategy: &dyn TransportStrategy, panic: Box<dyn Any + Send>) -> TransportResult {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());

    TransportResult::Failure(TransportFailure::new(
        TransportFailureKind::Unknown,
        format!("strategy {} panicked: {}", strategy.name(), message),
    ))
}

impl std::fmt::Debug for FallbackOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackOrchestrator")
            .field("name", &self.config.name)
            .field("strategies", &self.config.strategies.len())
            .finish()
    }
}

impl Service<RequestSpec> for FallbackOrchestrator {
    type Response = FallbackOutcome;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, spec: RequestSpec) -> Self::Future {
        let orchestrator = self.clone();
        Box::pin(async move { Ok(orchestrator.run(&spec).await) })
    }
}
