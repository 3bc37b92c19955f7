//! Request issued through a separately configured client.

use crate::config::TransportConfig;
use crate::error::TransportBuildError;
use crate::http::{self, Headers};
use futures::future::BoxFuture;
use reqwest::Client;
use tourist_fetch_core::{RequestSpec, StrategyKind, TransportResult};
use tourist_fetch_fallback::TransportStrategy;

/// Retries the call through a second client that shares nothing with the
/// primary one: HTTP/1 only, no idle connection reuse, no default user agent,
/// and only the headers the request needs.
///
/// Outcome mapping matches [`DirectStrategy`](crate::DirectStrategy).
#[derive(Debug, Clone)]
pub struct AlternateClientStrategy {
    name: String,
    client: Client,
}

impl AlternateClientStrategy {
    /// Builds a strategy with its own client.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportBuildError> {
        let client = Client::builder()
            .http1_only()
            .pool_max_idle_per_host(0)
            .timeout(config.timeout)
            .build()
            .map_err(TransportBuildError::Client)?;
        Ok(Self::with_client(client))
    }

    /// Builds a strategy around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self {
            name: "alternate_client".to_string(),
            client,
        }
    }

    /// Overrides the diagnostic name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl TransportStrategy for AlternateClientStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::AlternateClient
    }

    fn attempt<'a>(&'a self, spec: &'a RequestSpec) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            #[cfg(feature = "tracing")]
            tracing::debug!(strategy = %self.name, url = %spec.url(), "Alternate client request");

            let request = http::build(&self.client, spec.url(), spec, Headers::Minimal);
            http::send_readable(request).await
        })
    }
}
