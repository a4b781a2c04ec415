//! # Monitoring
//!
//! Day 5. The day-3 weather proxy, rebuilt on keyless upstreams and
//! instrumented with Prometheus.
//!
//! ## Routes
//!
//! - `GET /weather/{city}`: geocode, fetch the forecast, count the lookup
//!   under its temperature description
//! - `GET /metrics?kind=system|analytic`: text exposition of one registry
pub mod api;
pub mod config;
pub mod forecast;
pub mod metrics;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tracing::info;

use api::{get_metrics, get_weather};
use config::Settings;
use state::State;

pub fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/weather/{city}", get(get_weather))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}

pub async fn start_server(settings: Settings) -> anyhow::Result<()> {
    info!(
        "Starting {} v{} ({}) on {}:{}",
        settings.app_name, settings.version, settings.environment, settings.host, settings.port
    );

    let state = State::new(settings)?;

    service::serve(app(state.clone()), &state.settings.host, state.settings.port).await?;

    info!("Metrics collectors shutdown");

    Ok(())
}
