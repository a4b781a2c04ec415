use std::sync::Arc;

use axum::extract;
use service::{AppError, Json, Path, Query};

use crate::{
    schemas::{ConvertQuery, ConvertResponse, WeatherResponse},
    state::State,
    utils::{celsius_to_fahrenheit, describe},
};

pub async fn convert_temperature(Query(query): Query<ConvertQuery>) -> Json<ConvertResponse> {
    Json(ConvertResponse {
        celsius: query.celsius,
        fahrenheit: celsius_to_fahrenheit(query.celsius),
    })
}

pub async fn get_weather(
    extract::State(state): extract::State<Arc<State>>,
    Path(city): Path<String>,
) -> Result<Json<WeatherResponse>, AppError> {
    let current = state.client.current(&city).await?;

    Ok(Json(WeatherResponse {
        city,
        temperature: current.temp_c,
        description: describe(current.temp_c),
        feels_like: current.feelslike_c,
    }))
}
