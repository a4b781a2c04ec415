use std::sync::Arc;

use axum::{
    extract,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use service::{AppError, Json, Path, Query};
use tracing::debug;
use weather::{schemas::WeatherResponse, utils::describe};

use crate::{
    metrics::{MetricKind, Metrics},
    state::State,
};

#[derive(Deserialize)]
pub struct MetricsQuery {
    pub kind: Option<String>,
}

pub async fn get_weather(
    extract::State(state): extract::State<Arc<State>>,
    Path(city): Path<String>,
) -> Result<Json<WeatherResponse>, AppError> {
    let current = state.client.fetch(&city).await?;
    let description = describe(current.temperature_2m);

    let total = state.metrics.record(description);
    debug!(%description, total, "Recorded lookup");

    Ok(Json(WeatherResponse {
        city,
        temperature: current.temperature_2m,
        description,
        feels_like: current.apparent_temperature,
    }))
}

pub async fn get_metrics(
    extract::State(state): extract::State<Arc<State>>,
    Query(query): Query<MetricsQuery>,
) -> Result<Response, AppError> {
    let kind: MetricKind = query
        .kind
        .ok_or_else(|| AppError::invalid("missing", &["query", "kind"], "Field required"))?
        .parse()
        .map_err(|error| AppError::Unprocessable(vec![error]))?;

    debug!("Rendering {kind} metrics");

    let body = state
        .metrics
        .render(kind)
        .map_err(|e| AppError::internal(format!("Failed to generate metrics: {e}")))?;

    Ok(([(CONTENT_TYPE, Metrics::content_type())], body).into_response())
}
