//! Transport configuration.

use std::time::Duration;
use url::Url;

/// Default cross-origin proxy prefix.
pub const DEFAULT_PROXY: &str = "https://cors-anywhere.herokuapp.com/";

/// Settings shared by the HTTP strategies.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub(crate) proxy_base: Url,
    pub(crate) origin: String,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TransportConfig {
    /// Creates a builder.
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }

    /// The proxy prefix the proxied strategy routes through.
    pub fn proxy_base(&self) -> &Url {
        &self.proxy_base
    }

    /// The `Origin` header sent through the proxy.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for [`TransportConfig`].
pub struct TransportConfigBuilder {
    proxy_base: Url,
    origin: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for TransportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportConfigBuilder {
    /// Creates a builder with a 10 second timeout and the public CORS proxy.
    pub fn new() -> Self {
        Self {
            proxy_base: Url::parse(DEFAULT_PROXY).expect("default proxy URL is valid"),
            origin: "http://localhost:8081".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("tourist-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Sets the proxy prefix. The target URL is appended to it verbatim.
    pub fn proxy_base(mut self, proxy_base: Url) -> Self {
        self.proxy_base = proxy_base;
        self
    }

    /// Sets the `Origin` header sent through the proxy.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` of the primary client.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> TransportConfig {
        TransportConfig {
            proxy_base: self.proxy_base,
            origin: self.origin,
            timeout: self.timeout,
            user_agent: self.user_agent,
        }
    }
}
