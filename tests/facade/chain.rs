//! The standard strategy chain over real HTTP.

use super::client;
use serde_json::json;
use tourist_fetch_classifier::UserFacingCategory;
use tourist_fetch_core::{Platform, StrategyKind, TransportFailureKind};
use tourist_fetch_facade::HotelQuery;
use wiremock::matchers::{any, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stats() -> serde_json::Value {
    json!({"counts": {"positive": 4, "neutral": 1, "negative": 0}})
}

#[tokio::test]
async fn native_only_issues_direct_requests() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    let outcome = client
        .review_stats(&HotelQuery::named("Grand Plaza"))
        .await
        .unwrap();

    assert!(outcome.used_placeholder());
    assert_eq!(outcome.outcome.errors.len(), 1);
    assert_eq!(outcome.outcome.errors[0].strategy_kind, StrategyKind::Direct);
    assert_eq!(
        outcome.error.map(|e| e.category),
        Some(UserFacingCategory::ServerError)
    );
}

#[tokio::test]
async fn browser_falls_through_to_the_proxy() {
    let server = MockServer::start().await;
    Mock::given(path("/get_review_stats"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path_regex(r"^/http.*/get_review_stats$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Platform::Browser);
    let outcome = client
        .review_stats(&HotelQuery::named("Grand Plaza"))
        .await
        .unwrap();

    assert!(outcome.is_live());
    assert_eq!(outcome.payload(), &stats());
    assert_eq!(outcome.outcome.errors.len(), 1);
    assert_eq!(
        outcome.outcome.errors[0].kind(),
        TransportFailureKind::HttpError(500)
    );
}

#[tokio::test]
async fn browser_total_failure_reports_cors() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client(&server, Platform::Browser);
    let outcome = client
        .review_stats(&HotelQuery::named("Grand Plaza"))
        .await
        .unwrap();

    let kinds: Vec<_> = outcome.outcome.errors.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TransportFailureKind::HttpError(503),
            TransportFailureKind::NetworkUnreachable,
            TransportFailureKind::HttpError(503),
            TransportFailureKind::OpaqueResponse,
        ]
    );
    assert!(outcome.used_placeholder());
    assert_eq!(
        outcome.error.map(|e| e.category),
        Some(UserFacingCategory::CorsRestriction)
    );
}
