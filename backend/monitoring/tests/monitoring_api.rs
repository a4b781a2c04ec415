use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    body::Body,
    extract::Query,
    http::{HeaderMap, Request, StatusCode, header::CONTENT_TYPE, header::USER_AGENT},
    response::{IntoResponse, Response},
    routing::get,
};
use http_body_util::BodyExt;
use monitoring::{
    app,
    config::Settings,
    forecast::CURRENT_FIELDS,
    metrics::Metrics,
    state::State,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Stands in for Nominatim's `search`.
async fn fake_search(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !headers.contains_key(USER_AGENT) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let place = match params.get("q").map(String::as_str) {
        Some("Atlantis") => return Json(json!([])).into_response(),
        Some("Nowhere") => json!({ "lat": "0.0", "lon": "0.0" }),
        Some("Yakutsk") => json!({ "lat": "62.0275", "lon": "129.7315" }),
        _ => json!({ "lat": "51.5073", "lon": "-0.1276" }),
    };

    Json(json!([place])).into_response()
}

/// Stands in for Open-Meteo's `forecast`.
async fn fake_forecast(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("current").map(String::as_str) != Some(CURRENT_FIELDS)
        || params.get("timezone").map(String::as_str) != Some("auto")
    {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let latitude: f64 = params
        .get("latitude")
        .and_then(|lat| lat.parse().ok())
        .unwrap_or(f64::NAN);

    if latitude == 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": true, "reason": "Latitude must be in range" })),
        )
            .into_response();
    }

    let (temperature, apparent) = if latitude > 60.0 { (-5.0, -10.0) } else { (22.5, 21.0) };

    Json(json!({
        "current": {
            "temperature_2m": temperature,
            "apparent_temperature": apparent,
            "weather_code": 3,
        }
    }))
    .into_response()
}

async fn spawn_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let upstream = Router::new()
        .route("/search", get(fake_search))
        .route("/v1/forecast", get(fake_forecast));

    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    format!("http://{addr}")
}

async fn new_state() -> Arc<State> {
    let base = spawn_upstream().await;

    State::new(Settings {
        geocoding_url: format!("{base}/search"),
        forecast_url: format!("{base}/v1/forecast"),
        ..Settings::default()
    })
    .unwrap()
}

struct Reply {
    status: StatusCode,
    content_type: String,
    text: String,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

async fn get_reply(state: Arc<State>, uri: &str) -> Reply {
    let response = app(state)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    Reply {
        status,
        content_type,
        text: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

// ===== /weather/{city} =====

#[tokio::test]
async fn weather_success() {
    let reply = get_reply(new_state().await, "/weather/London").await;

    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["city"], "London");
    assert_eq!(body["temperature"], 22.5);
    assert_eq!(body["feels_like"], 21.0);
    assert_eq!(body["description"], "warm");
}

#[tokio::test]
async fn weather_cold_city() {
    let reply = get_reply(new_state().await, "/weather/Yakutsk").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["description"], "freezing");
}

#[tokio::test]
async fn weather_unknown_city_is_404() {
    let reply = get_reply(new_state().await, "/weather/Atlantis").await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert!(reply.json()["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn weather_forecast_400_is_404() {
    let reply = get_reply(new_state().await, "/weather/Nowhere").await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.json()["detail"], "City 'Nowhere' not found");
}

#[tokio::test]
async fn weather_unreachable_upstream_is_502() {
    let state = State::new(Settings {
        geocoding_url: "http://127.0.0.1:1/search".to_string(),
        ..Settings::default()
    })
    .unwrap();

    let reply = get_reply(state, "/weather/London").await;

    assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
}

// ===== /metrics =====

#[tokio::test]
async fn metrics_system() {
    let reply = get_reply(new_state().await, "/metrics?kind=system").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_type, Metrics::content_type());
    assert!(reply.text.contains("# HELP"));
    assert!(reply.text.contains("# TYPE"));
    assert!(reply.text.contains("service_info"));

    #[cfg(target_os = "linux")]
    assert!(reply.text.contains("process_"));
}

#[tokio::test]
async fn metrics_without_kind_is_422() {
    let reply = get_reply(new_state().await, "/metrics").await;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = &reply.json()["detail"][0];
    assert_eq!(error["type"], "missing");
    assert_eq!(error["loc"], json!(["query", "kind"]));
}

#[tokio::test]
async fn metrics_with_invalid_kind_is_422() {
    let reply = get_reply(new_state().await, "/metrics?kind=invalid").await;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(reply.content_type, "application/json");
    assert_eq!(reply.json()["detail"][0]["type"], "enum");
}

#[tokio::test]
async fn metrics_with_empty_kind_is_422() {
    let reply = get_reply(new_state().await, "/metrics?kind=").await;

    assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn metrics_kind_is_case_sensitive() {
    let state = new_state().await;

    for kind in ["System", "SYSTEM", "systeM"] {
        let reply = get_reply(state.clone(), &format!("/metrics?kind={kind}")).await;
        assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY, "kind {kind}");
    }
}

#[tokio::test]
async fn metrics_ignores_extra_params() {
    let reply = get_reply(new_state().await, "/metrics?kind=system&extra=param").await;

    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.text.contains("service_info"));
}

#[tokio::test]
async fn weather_lookup_is_counted_in_analytic_registry() {
    let state = new_state().await;

    let before = get_reply(state.clone(), "/metrics?kind=analytic").await;
    assert!(!before.text.contains("temp_feels_like{"));

    get_reply(state.clone(), "/weather/London").await;
    let after = get_reply(state, "/metrics?kind=analytic").await;

    assert_eq!(after.status, StatusCode::OK);
    assert!(after.text.contains("# TYPE temp_feels_like counter"));
    assert!(after.text.contains("temp_feels_like{feels_like=\"warm\"} 1"));
}

#[tokio::test]
async fn failed_lookup_is_not_counted() {
    let state = new_state().await;

    get_reply(state.clone(), "/weather/Atlantis").await;
    let reply = get_reply(state, "/metrics?kind=analytic").await;

    assert!(!reply.text.contains("temp_feels_like{"));
}
