//! # Weather
//!
//! Day 3. A thin proxy in front of WeatherAPI.
//!
//! ## Routes
//!
//! - `GET /health`: liveness
//! - `GET /convert?celsius=`: Celsius to Fahrenheit, one decimal
//! - `GET /weather/{city}`: current temperature, feels-like, and a
//!   one-word description of the temperature
//!
//! The description classifier in [`utils`] is shared with the day-5
//! monitoring service.
use std::sync::Arc;

use axum::{Router, routing::get};
use service::health::health_handler;
use tracing::{info, warn};

pub mod config;
pub mod routes;
pub mod schemas;
pub mod services;
pub mod state;
pub mod utils;

use config::Settings;
use routes::{convert_temperature, get_weather};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/convert", get(convert_temperature))
        .route("/weather/{city}", get(get_weather))
        .with_state(state)
}

pub async fn start_server(settings: Settings) -> std::io::Result<()> {
    info!("Starting Weather Service on {}:{}", settings.host, settings.port);

    if settings.api_key.is_empty() {
        warn!("API_KEY not set, upstream lookups will be rejected");
    }

    let state = State::new(settings);

    service::serve(app(state.clone()), &state.settings.host, state.settings.port).await
}
