//! The transport strategy seam.

use futures::future::BoxFuture;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tourist_fetch_core::{RequestSpec, StrategyKind, TransportFailure, TransportResult};
use tower::{Service, ServiceExt};

/// One concrete way of attempting a network call.
///
/// Implementations must not panic or return early with an error: every
/// failure is reported as [`TransportResult::Failure`]. A single attempt never
/// retries internally.
pub trait TransportStrategy: Send + Sync {
    /// Name recorded in diagnostics.
    fn name(&self) -> &str;

    /// How this strategy issues its request.
    fn kind(&self) -> StrategyKind;

    /// Performs one attempt.
    fn attempt<'a>(&'a self, spec: &'a RequestSpec) -> BoxFuture<'a, TransportResult>;
}

/// Shared, type-erased strategy.
pub type BoxedStrategy = Arc<dyn TransportStrategy>;

type AttemptFn = dyn Fn(RequestSpec) -> BoxFuture<'static, TransportResult> + Send + Sync;

/// A strategy backed by an async closure.
///
/// ```rust
/// use tourist_fetch_core::{StrategyKind, TransportFailure, TransportResult};
/// use tourist_fetch_fallback::{FnStrategy, TransportStrategy};
///
/// let strategy = FnStrategy::new("offline", StrategyKind::Direct, |_spec| async {
///     TransportResult::Failure(TransportFailure::unreachable("offline"))
/// });
/// assert_eq!(strategy.name(), "offline");
/// ```
#[derive(Clone)]
pub struct FnStrategy {
    name: String,
    kind: StrategyKind,
    f: Arc<AttemptFn>,
}

impl FnStrategy {
    /// Wraps `f`, which receives an owned copy of the request for each attempt.
    pub fn new<F, Fut>(name: impl Into<String>, kind: StrategyKind, f: F) -> Self
    where
        F: Fn(RequestSpec) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TransportResult> + Send + 'static,
    {
        Self {
            name: name.into(),
            kind,
            f: Arc::new(move |spec| Box::pin(f(spec))),
        }
    }
}

impl TransportStrategy for FnStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StrategyKind {
        self.kind
    }

    fn attempt<'a>(&'a self, spec: &'a RequestSpec) -> BoxFuture<'a, TransportResult> {
        (self.f)(spec.clone())
    }
}

impl std::fmt::Debug for FnStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStrategy")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Adapts any `tower::Service<RequestSpec>` yielding a JSON value into a strategy.
///
/// The service is cloned per attempt, so stacks built with
/// `tower::ServiceBuilder` (timeouts, rate limits) can serve as strategies.
#[derive(Clone)]
pub struct ServiceStrategy<S> {
    name: String,
    kind: StrategyKind,
    service: S,
}

impl<S> ServiceStrategy<S> {
    /// Wraps `service`.
    pub fn new(name: impl Into<String>, kind: StrategyKind, service: S) -> Self {
        Self {
            name: name.into(),
            kind,
            service,
        }
    }
}

impl<S> TransportStrategy for ServiceStrategy<S>
where
    S: Service<RequestSpec, Response = Value, Error = TransportFailure>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StrategyKind {
        self.kind
    }

    fn attempt<'a>(&'a self, spec: &'a RequestSpec) -> BoxFuture<'a, TransportResult> {
        let service = self.service.clone();
        let spec = spec.clone();
        Box::pin(async move { service.oneshot(spec).await.into() })
    }
}
