//! Client configuration.

use serde::Deserialize;
use std::time::Duration;
use tourist_fetch_core::Platform;
use tourist_fetch_transport::{DEFAULT_PROXY, TransportConfig};
use url::Url;

const DEFAULT_ORIGIN: &str = "http://localhost:8081";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while building or loading a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The URL cannot have endpoint paths joined onto it.
    #[error("{field} cannot be used as a base URL: {url}")]
    NotABase {
        /// Which setting was rejected.
        field: &'static str,
        /// The rejected URL.
        url: String,
    },
}

/// Settings for a [`TouristClient`](crate::TouristClient).
///
/// Every endpoint is resolved against one `base_url`.
///
/// ```rust
/// use tourist_fetch_core::Platform;
/// use tourist_fetch_facade::ClientConfig;
///
/// let config = ClientConfig::from_toml_str(r#"
///     base_url = "http://localhost:5001"
///     platform = "browser"
///     timeout_ms = 2500
/// "#).unwrap();
///
/// assert_eq!(config.platform(), Platform::Browser);
/// assert_eq!(config.endpoint("top_places").unwrap().as_str(), "http://localhost:5001/top_places");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "ClientConfigFile")]
pub struct ClientConfig {
    base_url: Url,
    proxy_url: Url,
    origin: String,
    timeout: Duration,
    platform: Platform,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ClientConfigFile {
    base_url: Url,
    proxy_url: Option<Url>,
    origin: Option<String>,
    timeout_ms: Option<u64>,
    #[serde(default)]
    platform: Platform,
}

impl TryFrom<ClientConfigFile> for ClientConfig {
    type Error = ConfigError;

    fn try_from(file: ClientConfigFile) -> Result<Self, Self::Error> {
        let mut builder = ClientConfig::builder(file.base_url).platform(file.platform);
        if let Some(proxy_url) = file.proxy_url {
            builder = builder.proxy_url(proxy_url);
        }
        if let Some(origin) = file.origin {
            builder = builder.origin(origin);
        }
        if let Some(ms) = file.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        builder.build()
    }
}

impl ClientConfig {
    /// Creates a builder for the backend at `base_url`.
    pub fn builder(base_url: Url) -> ClientConfigBuilder {
        ClientConfigBuilder::new(base_url)
    }

    /// Loads a configuration from a TOML document.
    ///
    /// Only `base_url` is required; `proxy_url`, `origin`, `timeout_ms`, and
    /// `platform` (`"native"` or `"browser"`) fall back to the builder
    /// defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// The backend base URL. Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The cross-origin proxy prefix.
    pub fn proxy_url(&self) -> &Url {
        &self.proxy_url
    }

    /// The `Origin` header sent through the proxy.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The host platform, which decides which strategies run.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolves `path` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }

    /// The transport settings derived from this configuration.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::builder()
            .proxy_base(self.proxy_url.clone())
            .origin(self.origin.clone())
            .timeout(self.timeout)
            .build()
    }
}

/// Builder for [`ClientConfig`].
pub struct ClientConfigBuilder {
    base_url: Url,
    proxy_url: Option<Url>,
    origin: String,
    timeout: Duration,
    platform: Platform,
}

impl ClientConfigBuilder {
    /// Creates a builder with the public CORS proxy, a 10 second timeout, and
    /// a native platform.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            proxy_url: None,
            origin: DEFAULT_ORIGIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
            platform: Platform::Native,
        }
    }

    /// Sets the cross-origin proxy prefix.
    pub fn proxy_url(mut self, proxy_url: Url) -> Self {
        self.proxy_url = Some(proxy_url);
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

    /// Sets the host platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = as_base("base_url", self.base_url)?;
        let proxy_url = match self.proxy_url {
            Some(url) => as_base("proxy_url", url)?,
            None => Url::parse(DEFAULT_PROXY).map_err(|_| ConfigError::NotABase {
                field: "proxy_url",
                url: DEFAULT_PROXY.to_string(),
            })?,
        };

        Ok(ClientConfig {
            base_url,
            proxy_url,
            origin: self.origin,
            timeout: self.timeout,
            platform: self.platform,
        })
    }
}

fn as_base(field: &'static str, mut url: Url) -> Result<Url, ConfigError> {
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase {
            field,
            url: url.to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
