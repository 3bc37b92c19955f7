//! Events emitted by the fallback orchestrator.

use std::time::Instant;
use tourist_fetch_core::{FetchEvent, StrategyKind, TransportFailureKind};

/// Events emitted while running a strategy chain.
#[derive(Debug, Clone)]
pub enum OrchestratorEvent {
    /// A strategy returned a payload of the expected shape; the chain stops.
    AttemptSucceeded {
        /// Name of the orchestrator.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// The strategy that succeeded.
        strategy: String,
        /// Its kind.
        strategy_kind: StrategyKind,
    },

    /// A strategy failed; the next one will be tried.
    AttemptFailed {
        /// Name of the orchestrator.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// The strategy that failed.
        strategy: String,
        /// Its kind.
        strategy_kind: StrategyKind,
        /// The recorded failure kind.
        failure: TransportFailureKind,
    },

    /// A strategy was not attempted because it does not run on this platform.
    StrategySkipped {
        /// Name of the orchestrator.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// The skipped strategy.
        strategy: String,
        /// Its kind.
        strategy_kind: StrategyKind,
    },

    /// Every attempted strategy failed; the placeholder was returned.
    PlaceholderApplied {
        /// Name of the orchestrator.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// How many attempts failed.
        failed_attempts: usize,
    },
}

impl FetchEvent for OrchestratorEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::AttemptSucceeded { .. } => "attempt_succeeded",
            Self::AttemptFailed { .. } => "attempt_failed",
            Self::StrategySkipped { .. } => "strategy_skipped",
            Self::PlaceholderApplied { .. } => "placeholder_applied",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            Self::AttemptSucceeded { timestamp, .. }
            | Self::AttemptFailed { timestamp, .. }
            | Self::StrategySkipped { timestamp, .. }
            | Self::PlaceholderApplied { timestamp, .. } => *timestamp,
        }
    }

    fn source_name(&self) -> &str {
        match self {
            Self::AttemptSucceeded { pattern_name, .. }
            | Self::AttemptFailed { pattern_name, .. }
            | Self::StrategySkipped { pattern_name, .. }
            | Self::PlaceholderApplied { pattern_name, .. } => pattern_name,
        }
    }
}
