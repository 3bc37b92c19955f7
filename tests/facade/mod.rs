//! Tests for tourist-fetch-facade against wiremock, organized into:
//!
//! - **dashboards**: review stats, solutions, issues, listings
//! - **auth**: login, registration, and session writes
//! - **chain**: strategy chain behavior through real HTTP

mod auth;
mod chain;
mod dashboards;

use std::sync::Arc;
use std::time::Duration;
use tourist_fetch_core::Platform;
use tourist_fetch_facade::{ClientConfig, MemorySessionStore, SessionStore, TouristClient};
use url::Url;
use wiremock::MockServer;

/// Config pointing both the backend and the proxy at `server`.
pub fn config(server: &MockServer, platform: Platform) -> ClientConfig {
    ClientConfig::builder(Url::parse(&server.uri()).unwrap())
        .proxy_url(Url::parse(&format!("{}/", server.uri())).unwrap())
        .timeout(Duration::from_secs(5))
        .platform(platform)
        .build()
        .unwrap()
}

pub fn client(server: &MockServer, platform: Platform) -> TouristClient {
    client_with_session(server, platform, Arc::new(MemorySessionStore::new()))
}

pub fn client_with_session(
    server: &MockServer,
    platform: Platform,
    session: Arc<dyn SessionStore>,
) -> TouristClient {
    init_tracing();
    TouristClient::new(config(server, platform), session).unwrap()
}

/// Routes pipeline logs to the test output. Set `RUST_LOG=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
