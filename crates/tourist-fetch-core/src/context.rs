//! Execution context detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The host the client is running in.
///
/// Browser hosts are subject to cross-origin restrictions, so the full
/// strategy chain (proxy and opaque probes included) is only useful there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Browser-hosted execution with cross-origin enforcement.
    Browser,
    /// Native execution; no cross-origin enforcement.
    #[default]
    Native,
}

impl Platform {
    /// Returns `true` for browser-hosted execution.
    pub fn is_browser(self) -> bool {
        matches!(self, Self::Browser)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Browser => f.write_str("browser"),
            Self::Native => f.write_str("native"),
        }
    }
}

/// Capability that reports the current [`Platform`].
///
/// Injected into the orchestrator and consulted once per logical request.
pub trait ExecutionContext: Send + Sync {
    /// Returns the platform the client is running on.
    fn platform(&self) -> Platform;
}

impl ExecutionContext for Platform {
    fn platform(&self) -> Platform {
        *self
    }
}

impl<F> ExecutionContext for F
where
    F: Fn() -> Platform + Send + Sync,
{
    fn platform(&self) -> Platform {
        self()
    }
}
