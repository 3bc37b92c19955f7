//! Transport metrics regression tests

use super::helpers::*;
use serial_test::serial;
use tourist_fetch_core::RequestSpec;
use tourist_fetch_fallback::TransportStrategy;
use tourist_fetch_transport::{DirectStrategy, TransportConfig};
use url::Url;
use wiremock::matchers::path;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[serial]
async fn http_response_metric_exists() {
    init_recorder();

    let server = MockServer::start().await;
    Mock::given(path("/top_places"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let strategy = DirectStrategy::new(&TransportConfig::default()).unwrap();
    let spec = RequestSpec::get(Url::parse(&format!("{}/top_places", server.uri())).unwrap());
    strategy.attempt(&spec).await;

    assert_counter_exists("fetch_http_responses_total");
    assert_metric_has_label("fetch_http_responses_total", "status", "418");
}
