//! Strategy kinds and the record left behind by a failed attempt.

use crate::context::Platform;
use crate::result::{TransportFailure, TransportFailureKind};
use std::fmt;

/// How a transport strategy issues its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Plain request against the backend with standard headers.
    Direct,
    /// Request routed through a cross-origin proxy host.
    Proxied,
    /// Request issued through a separately configured client.
    AlternateClient,
    /// Reachability probe whose body is never read.
    Opaque,
}

impl StrategyKind {
    /// Returns whether strategies of this kind are attempted on `platform`.
    ///
    /// Native hosts have no cross-origin enforcement to route around, so only
    /// direct requests are made there.
    pub fn runs_on(self, platform: Platform) -> bool {
        match platform {
            Platform::Browser => true,
            Platform::Native => matches!(self, Self::Direct),
        }
    }

    /// Stable lowercase label, used for metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Proxied => "proxied",
            Self::AlternateClient => "alternate_client",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed attempt, kept in attempt order for diagnostics and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    /// Name of the strategy that failed.
    pub strategy: String,
    /// Kind of the strategy that failed.
    pub strategy_kind: StrategyKind,
    /// What went wrong.
    pub failure: TransportFailure,
}

impl FailedAttempt {
    /// Creates a new attempt record.
    pub fn new(
        strategy: impl Into<String>,
        strategy_kind: StrategyKind,
        failure: TransportFailure,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            strategy_kind,
            failure,
        }
    }

    /// The failure kind of this attempt.
    pub fn kind(&self) -> TransportFailureKind {
        self.failure.kind
    }
}

impl fmt::Display for FailedAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.strategy, self.strategy_kind, self.failure)
    }
}
