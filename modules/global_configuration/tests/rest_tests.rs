//! REST surface tests driven through the router with `oneshot`

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use global_configuration::api::rest::routes::register_routes;
use global_configuration::contract::Secret;
use global_configuration::domain::Service;
use global_configuration::infra::http::HttpConnectivityChecker;
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

mod common;
use common::MockConfigurationRepo;

async fn setup() -> (Router, Arc<Service>, MockConfigurationRepo) {
    let repo = MockConfigurationRepo::new();
    let service = Arc::new(Service::load(Arc::new(repo.clone())).await.unwrap());
    let router = register_routes(
        Router::new(),
        service.clone(),
        Arc::new(HttpConnectivityChecker::new()),
    )
    .unwrap();
    (router, service, repo)
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_get_empty_configuration() {
    let (router, _, _) = setup().await;

    let (status, body) = send(&router, Method::GET, "/global-configuration", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], Value::Null);
    assert_eq!(body["has_password"], false);
    assert_eq!(body["optional_block"], false);
}

#[tokio::test]
async fn test_put_applies_each_field_and_hides_password() {
    let (router, service, repo) = setup().await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/global-configuration",
        Some(json!({
            "label": "Ops Team",
            "user_name": "admin",
            "password": "s3cret",
            "optional_block": true
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Ops Team");
    assert_eq!(body["user_name"], "admin");
    assert_eq!(body["has_password"], true);
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("s3cret"));

    assert_eq!(repo.save_count(), 4);
    assert_eq!(service.password(), Some(Secret::new("s3cret")));
}

#[tokio::test]
async fn test_put_does_not_gate_on_validation() {
    let (router, service, _) = setup().await;

    let (status, _) = send(
        &router,
        Method::PUT,
        "/global-configuration",
        Some(json!({ "label": "Ops123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(service.label().as_deref(), Some("Ops123"));
}

#[tokio::test]
async fn test_put_persistence_failure_is_500() {
    let (router, _, repo) = setup().await;
    repo.fail_saves(true);

    let (status, body) = send(
        &router,
        Method::PUT,
        "/global-configuration",
        Some(json!({ "label": "Ops Team" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["title"], "Persistence Error");
}

#[tokio::test]
async fn test_check_field_verdicts() {
    let (router, _, repo) = setup().await;

    let (status, body) = send(&router, Method::GET, "/global-configuration/check/label?value=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "warning");
    assert_eq!(body["message"], "Please specify a label.");

    let (_, body) = send(
        &router,
        Method::GET,
        "/global-configuration/check/label?value=Ops%20Team",
        None,
    )
    .await;
    assert_eq!(body["kind"], "ok");

    let (_, body) = send(
        &router,
        Method::GET,
        "/global-configuration/check/userName?value=admin1",
        None,
    )
    .await;
    assert_eq!(body["kind"], "warning");
    assert_eq!(body["message"], "UserName can only contain letters.");

    // Field without a validator
    let (_, body) = send(&router, Method::GET, "/global-configuration/check/url?value=x", None).await;
    assert_eq!(body["kind"], "ok");

    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn test_check_unknown_field_is_404() {
    let (router, _, _) = setup().await;

    let (status, body) = send(&router, Method::GET, "/global-configuration/check/colour?value=x", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_connection_with_explicit_credentials() {
    let (router, _, _) = setup().await;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/json");
        then.status(403);
    });

    let (status, body) = send(
        &router,
        Method::POST,
        "/global-configuration/test-connection",
        Some(json!({
            "url": server.url("/api/json"),
            "user_name": "admin",
            "password": "wrong"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "error");
    assert!(body["message"].as_str().unwrap().contains("403"));
    mock.assert();
}

#[tokio::test]
async fn test_connection_falls_back_to_stored_values() {
    let (router, service, _) = setup().await;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/json")
            .header("authorization", "Basic YWRtaW46czNjcmV0");
        then.status(200);
    });

    service.set_url(Some(server.url("/api/json"))).await.unwrap();
    service.set_user_name(Some("admin".to_string())).await.unwrap();
    service.set_password(Some(Secret::new("s3cret"))).await.unwrap();

    let (status, body) = send(
        &router,
        Method::POST,
        "/global-configuration/test-connection",
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "ok");
    assert_eq!(body["message"], "Success");
    mock.assert();
}

#[tokio::test]
async fn test_connection_missing_values_is_400() {
    let (router, _, _) = setup().await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/global-configuration/test-connection",
        Some(json!({ "user_name": "admin", "password": "pw" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("url"));
}

#[tokio::test]
async fn test_connection_unreachable_is_502() {
    let (router, _, _) = setup().await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/global-configuration/test-connection",
        Some(json!({
            "url": "http://127.0.0.1:1/",
            "user_name": "admin",
            "password": "pw"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["title"], "Connection Failed");
}
