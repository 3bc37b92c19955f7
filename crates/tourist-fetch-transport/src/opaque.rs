//! Reachability probe whose response is never read.

use crate::config::TransportConfig;
use crate::direct::primary_client;
use crate::error::TransportBuildError;
use crate::http::{self, Headers};
use futures::future::BoxFuture;
use reqwest::Client;
use tourist_fetch_core::{RequestSpec, StrategyKind, TransportFailure, TransportResult};
use tourist_fetch_fallback::TransportStrategy;

/// Sends the request without custom headers and discards the response.
///
/// Always yields `OpaqueResponse`: the detail records whether the remote
/// answered at all, but no data is ever returned from this strategy.
#[derive(Debug, Clone)]
pub struct OpaqueStrategy {
    name: String,
    client: Client,
}

impl OpaqueStrategy {
    /// Builds a strategy with its own client.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportBuildError> {
        Ok(Self::with_client(primary_client(config)?))
    }

    /// Builds a strategy around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self {
            name: "opaque".to_string(),
            client,
        }
    }

    /// Overrides the diagnostic name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl TransportStrategy for OpaqueStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Opaque
    }

    fn attempt<'a>(&'a self, spec: &'a RequestSpec) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            let detail = match http::build(&self.client, spec.url(), spec, Headers::Bare)
                .send()
                .await
            {
                Ok(_) => "remote reachable, response body is opaque".to_string(),
                Err(err) => format!("opaque probe failed: {}", http::describe(&err)),
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(strategy = %self.name, %detail, "Opaque probe finished");

            TransportResult::Failure(TransportFailure::opaque(detail))
        })
    }
}
