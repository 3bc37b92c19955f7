//! Request routed through a cross-origin proxy.

use crate::config::TransportConfig;
use crate::direct::primary_client;
use crate::error::TransportBuildError;
use crate::http::{self, Headers};
use futures::future::BoxFuture;
use reqwest::Client;
use reqwest::header::ORIGIN;
use tourist_fetch_core::{RequestSpec, StrategyKind, TransportFailure, TransportResult};
use tourist_fetch_fallback::TransportStrategy;
use url::Url;

/// Sends the request to `proxy_base` followed by the full target URL, with an
/// `Origin` header.
///
/// Every failure (transport error, non-2xx, unreadable body) is reported as
/// `NetworkUnreachable`: a proxy's own error pages say nothing reliable about
/// the backend.
#[derive(Debug, Clone)]
pub struct ProxiedStrategy {
    name: String,
    client: Client,
    proxy_base: Url,
    origin: String,
}

impl ProxiedStrategy {
    /// Builds a strategy with its own client.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportBuildError> {
        Ok(Self::with_client(primary_client(config)?, config))
    }

    /// Builds a strategy around an existing client.
    pub fn with_client(client: Client, config: &TransportConfig) -> Self {
        Self {
            name: "proxied".to_string(),
            client,
            proxy_base: config.proxy_base.clone(),
            origin: config.origin.clone(),
        }
    }

    /// Overrides the diagnostic name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The URL actually requested for `spec`.
    pub fn proxied_url(&self, spec: &RequestSpec) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}{}", self.proxy_base, spec.url()))
    }

    async fn fetch(&self, spec: &RequestSpec) -> Result<serde_json::Value, TransportFailure> {
        let url = self
            .proxied_url(spec)
            .map_err(|err| TransportFailure::unreachable(format!("invalid proxy URL: {}", err)))?;

        let response = http::build(&self.client, url, spec, Headers::Json)
            .header(ORIGIN, self.origin.as_str())
            .send()
            .await
            .map_err(|err| TransportFailure::unreachable(http::describe(&err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportFailure::unreachable(format!(
                "proxy answered with status {}",
                status
            )));
        }

        http::read_json(response)
            .await
            .map_err(|failure| TransportFailure::unreachable(failure.detail))
    }
}

impl TransportStrategy for ProxiedStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Proxied
    }

    fn attempt<'a>(&'a self, spec: &'a RequestSpec) -> BoxFuture<'a, TransportResult> {
        Box::pin(async move {
            #[cfg(feature = "tracing")]
            tracing::debug!(strategy = %self.name, proxy = %self.proxy_base, "Proxied request");

            self.fetch(spec).await.into()
        })
    }
}
