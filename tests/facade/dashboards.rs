//! Dashboard features.

use super::{client, client_with_session};
use serde_json::json;
use std::sync::Arc;
use tourist_fetch_classifier::UserFacingCategory;
use tourist_fetch_core::Platform;
use tourist_fetch_facade::features::{ReviewStats, SolutionsFeature};
use tourist_fetch_facade::{FileSessionStore, HotelQuery, SessionKey, SessionStore};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stats_body() -> serde_json::Value {
    json!({
        "bar_plot": "https://charts.example/bar.png",
        "pie_chart": "https://charts.example/pie.png",
        "counts": {"positive": 10, "neutral": 2, "negative": 3},
        "sample_reviews": {"positive": ["Lovely stay"], "negative": ["Cold room"]}
    })
}

#[tokio::test]
async fn review_stats_live() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_review_stats"))
        .and(query_param("hotel_name", "Grand Plaza"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    let outcome = client
        .review_stats(&HotelQuery::named("Grand Plaza"))
        .await
        .unwrap();

    assert!(outcome.is_live());
    assert_eq!(outcome.error, None);
    assert_eq!(outcome.payload(), &stats_body());

    let stats: ReviewStats = outcome.decode().unwrap();
    assert_eq!(stats.counts.total(), 15);
    assert_eq!(stats.counts.percentages().positive, 67);
    assert_eq!(stats.sample_reviews.negative, vec!["Cold room".to_string()]);
}

#[tokio::test]
async fn execute_is_idempotent_against_a_stable_backend() {
    let server = MockServer::start().await;
    Mock::given(path("/get_review_stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    let query = HotelQuery::named("Grand Plaza");

    let first = client.review_stats(&query).await.unwrap();
    let second = client.review_stats(&query).await.unwrap();

    assert_eq!(first.payload(), second.payload());
    assert_eq!(first, second);
}

#[tokio::test]
async fn forbidden_review_stats_fall_back_to_samples() {
    let server = MockServer::start().await;
    Mock::given(path("/get_review_stats"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    let outcome = client
        .review_stats(&HotelQuery::named("Grand Plaza"))
        .await
        .unwrap();

    assert!(outcome.used_placeholder());
    let error = outcome.error.clone().unwrap();
    assert_eq!(error.category, UserFacingCategory::InvalidCredentials);
    assert_eq!(error.message, UserFacingCategory::InvalidCredentials.message());

    let stats: ReviewStats = outcome.decode().unwrap();
    assert_eq!(stats.counts.positive, 142);
}

#[tokio::test]
async fn hotel_name_is_derived_and_persisted() {
    let server = MockServer::start().await;
    Mock::given(path("/get_review_stats"))
        .and(query_param("hotel_name", "Sea View Hotel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session = Arc::new(FileSessionStore::new(dir.path().join("session.json")));
    session.set(SessionKey::UserEmail, "sea-view@x.io").unwrap();

    let client = client_with_session(&server, Platform::Native, session.clone());
    let outcome = client
        .review_stats(&HotelQuery::from_session())
        .await
        .unwrap();

    assert!(outcome.is_live());
    let reopened = FileSessionStore::new(dir.path().join("session.json"));
    assert_eq!(
        reopened.get(SessionKey::HotelName).unwrap().as_deref(),
        Some("Sea View Hotel")
    );
}

#[tokio::test]
async fn solutions_accept_wrapped_lists() {
    let server = MockServer::start().await;
    Mock::given(path("/generate_solutions"))
        .and(query_param("hotel_name", "Grand Plaza"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "solutions": [{"issue": "Noisy AC", "solution": "Replace units"}]
        })))
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    let outcome = client
        .solutions(&HotelQuery::named("Grand Plaza"))
        .await
        .unwrap();

    assert!(outcome.is_live());
    let solutions = SolutionsFeature::decode(outcome.payload()).unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].issue, "Noisy AC");
}

#[tokio::test]
async fn listings_fall_back_to_empty_lists() {
    let server = MockServer::start().await;
    Mock::given(path("/top_places"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(path("/get_reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"text": "Great"}])))
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);

    let places = client.top_places().await.unwrap();
    assert_eq!(places.payload(), &json!([]));
    assert_eq!(
        places.error.map(|e| e.category),
        Some(UserFacingCategory::ServerError)
    );

    let reviews = client.reviews().await.unwrap();
    assert!(reviews.is_live());
    assert_eq!(reviews.payload(), &json!([{"text": "Great"}]));
}

#[tokio::test]
async fn blank_hotel_name_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(path("/get_issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    let err = client.issues(&HotelQuery::named("  ")).await.unwrap_err();

    assert!(matches!(err, tourist_fetch_facade::FacadeError::InvalidInput(_)));
}

#[tokio::test]
async fn concurrent_callers_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(path("/get_review_stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(4)
        .mount(&server)
        .await;

    let client = Arc::new(client(&server, Platform::Native));
    let calls = ["Grand Plaza", "Sea View", "Harbor Inn", "Old Town"].map(|name| {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.review_stats(&HotelQuery::named(name)).await })
    });

    for joined in futures::future::join_all(calls).await {
        let outcome = joined.unwrap().unwrap();
        assert!(outcome.is_live());
    }
}
