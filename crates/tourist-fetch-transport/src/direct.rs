//! Plain request against the backend.

use crate::config::TransportConfig;
use crate::error::TransportBuildError;
use crate::http::{self, Headers};
use futures::future::BoxFuture;
use reqwest::Client;
use tourist_fetch_core::{RequestSpec, StrategyKind, TransportResult};
use tourist_fetch_fallback::TransportStrategy;

/// Issues the request with JSON headers and reads the response.
///
/// - transport error => `NetworkUnreachable`
/// - non-2xx => `HttpError(status)`
/// - undecodable body => `MalformedBody`
#[derive(Debug, Clone)]
pub struct DirectStrategy {
    name: String,
    client: Client,
}

impl DirectStrategy {
    /// Builds a strategy with its own client.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportBuildError> {
        Ok(Self::with_client(primary_client(config)?))
    }

    /// Builds a strategy around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self {
            name: "direct".to_string(),
            client,
        }
    }

    /// Overrides the diagnostic name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

pub(crate) fn primary_client(config: &TransportConfig) -> Result<Client, TransportBuildError> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(TransportBuildError::Client)
}

impl TransportStrategy for DirectStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Direct
    }

    fn attempt<'a>(&'a self, spec: &'a RequestSpec) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            #[cfg(feature = "tracing")]
            tracing::debug!(strategy = %self.name, url = %spec.url(), "Direct request");

            let request = http::build(&self.client, spec.url(), spec, Headers::Json);
            http::send_readable(request).await
        })
    }
}
