use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use picker::routes::app;
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = get("/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn option_picks_service_for_name() {
    let (status, body) = get("/option?name=Grace&surname=Hopper").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Grace");
    assert_eq!(body["surname"], "Hopper");
    assert_eq!(body["service"], "document check service");
}

#[tokio::test]
async fn option_decodes_percent_encoded_names() {
    let (status, body) = get("/option?name=Mary%20Ann&surname=Smith").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "scoring service");
}

#[tokio::test]
async fn option_without_surname_is_422() {
    let (status, body) = get("/option?name=Grace").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "missing");
    assert_eq!(body["detail"][0]["loc"], serde_json::json!(["query", "surname"]));
}
