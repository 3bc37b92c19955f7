//! Core infrastructure for tourist-fetch.
//!
//! This crate holds the vocabulary shared by every stage of the pipeline:
//! - [`RequestSpec`]: one logical request and the shape its response must have
//! - [`TransportResult`] and [`TransportFailureKind`]: what a single attempt produced
//! - [`FailedAttempt`] and [`StrategyKind`]: the diagnostic record of a failed attempt
//! - [`ExecutionContext`]: where the client runs (browser or native host)
//! - An event system for observability

pub mod attempt;
pub mod context;
pub mod events;
pub mod request;
pub mod result;

pub use attempt::{FailedAttempt, StrategyKind};
pub use context::{ExecutionContext, Platform};
pub use events::{BoxedEventListener, EventListener, EventListeners, FetchEvent, FnListener};
pub use request::{ExpectedShape, Method, RequestSpec, ShapePredicate};
pub use result::{TransportFailure, TransportFailureKind, TransportResult};
