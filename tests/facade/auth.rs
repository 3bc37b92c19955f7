//! Login, registration, and session writes.

use super::{client, client_with_session};
use serde_json::json;
use std::sync::Arc;
use tourist_fetch_classifier::UserFacingCategory;
use tourist_fetch_core::Platform;
use tourist_fetch_facade::{
    FacadeError, LoginParams, MemorySessionStore, RegisterParams, SessionKey, SessionStore,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_records_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "email": "admin.grand@x.io",
            "password": "secret",
            "type": "admin"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "admin",
            "_id": "65f0aa01",
            "name": "Grand Admin"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let client = client_with_session(&server, Platform::Native, session.clone());

    let outcome = client
        .login(&LoginParams::new("admin.grand@x.io", "secret"))
        .await
        .unwrap();

    assert!(outcome.is_live());
    let read = |key| session.get(key).unwrap();
    assert_eq!(read(SessionKey::UserEmail).as_deref(), Some("admin.grand@x.io"));
    assert_eq!(read(SessionKey::UserType).as_deref(), Some("admin"));
    assert_eq!(read(SessionKey::UserId).as_deref(), Some("65f0aa01"));
    assert_eq!(read(SessionKey::UserName).as_deref(), Some("Grand Admin"));
}

#[tokio::test]
async fn rejected_login_is_classified() {
    let server = MockServer::start().await;
    Mock::given(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "bad password"})))
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let client = client_with_session(&server, Platform::Native, session.clone());

    let err = client
        .login(&LoginParams::new("ana@x.io", "wrong"))
        .await
        .unwrap_err();

    match err {
        FacadeError::Classified(classified) => {
            assert_eq!(classified.category, UserFacingCategory::InvalidCredentials);
            assert_eq!(
                classified.message,
                "Invalid credentials. Please check your email and password."
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(session.get(SessionKey::UserEmail).unwrap(), None);
}

#[tokio::test]
async fn login_response_without_type_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    let err = client
        .login(&LoginParams::new("ana@x.io", "secret"))
        .await
        .unwrap_err();

    assert_eq!(
        err.classified().map(|e| e.category),
        Some(UserFacingCategory::DataFormatInvalid)
    );
}

#[tokio::test]
async fn register_sends_the_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "email": "ana@x.io",
            "password": "123456",
            "type": "user",
            "name": "Ana"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "registered"})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(MemorySessionStore::new());
    let client = client_with_session(&server, Platform::Native, session.clone());

    client
        .register(&RegisterParams::new("Ana", "ana@x.io", "123456"))
        .await
        .unwrap();

    assert_eq!(session.get(SessionKey::UserName).unwrap().as_deref(), Some("Ana"));
    assert_eq!(session.get(SessionKey::UserId).unwrap().as_deref(), Some("ana@x.io"));
    assert_eq!(session.get(SessionKey::UserType).unwrap().as_deref(), Some("user"));
}

#[tokio::test]
async fn invalid_registration_never_reaches_the_backend() {
    let server = MockServer::start().await;
    Mock::given(path("/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);

    for params in [
        RegisterParams::new("", "ana@x.io", "123456"),
        RegisterParams::new("Ana", "not-an-email", "123456"),
        RegisterParams::new("Ana", "ana@x.io", "123"),
    ] {
        let err = client.register(&params).await.unwrap_err();
        assert!(matches!(err, FacadeError::InvalidInput(_)), "{params:?}");
    }
}

#[tokio::test]
async fn logout_clears_everything() {
    let server = MockServer::start().await;
    Mock::given(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"type": "user"})))
        .mount(&server)
        .await;

    let client = client(&server, Platform::Native);
    client
        .login(&LoginParams::new("ana@x.io", "secret"))
        .await
        .unwrap();
    client.logout().unwrap();

    for key in SessionKey::ALL {
        assert_eq!(client.session().get(key).unwrap(), None, "{key}");
    }
}
