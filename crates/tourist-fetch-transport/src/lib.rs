//! HTTP transport strategies for tourist-fetch.
//!
//! Four [`TransportStrategy`](tourist_fetch_fallback::TransportStrategy)
//! implementations over `reqwest`, differing only in how the request is issued
//! and whether the body is readable:
//!
//! | Strategy | Reads body | Failure mapping |
//! |---|---|---|
//! | [`DirectStrategy`] | yes | unreachable / `HttpError(status)` / malformed |
//! | [`ProxiedStrategy`] | yes | everything is unreachable |
//! | [`AlternateClientStrategy`] | yes | as direct |
//! | [`OpaqueStrategy`] | no | always opaque |
//!
//! [`standard_chain`] assembles them in the order the client tries them.

mod alternate;
mod config;
mod direct;
mod error;
mod http;
mod opaque;
mod proxied;

pub use alternate::AlternateClientStrategy;
pub use config::{DEFAULT_PROXY, TransportConfig, TransportConfigBuilder};
pub use direct::DirectStrategy;
pub use error::TransportBuildError;
pub use opaque::OpaqueStrategy;
pub use proxied::ProxiedStrategy;

use std::sync::Arc;
use tourist_fetch_fallback::BoxedStrategy;

/// Direct, proxied, alternate client, opaque; in that order.
///
/// Direct, proxied, and opaque share one connection pool; the alternate
/// client has its own.
pub fn standard_chain(config: &TransportConfig) -> Result<Vec<BoxedStrategy>, TransportBuildError> {
    let client = direct::primary_client(config)?;

    Ok(vec![
        Arc::new(DirectStrategy::with_client(client.clone())),
        Arc::new(ProxiedStrategy::with_client(client.clone(), config)),
        Arc::new(AlternateClientStrategy::new(config)?),
        Arc::new(OpaqueStrategy::with_client(client)),
    ])
}
