//! # Fibonacci
//!
//! Day 4. Shows what a key-value cache buys on an expensive computation.
//!
//! - `GET /ping`: `{"response": "pong"}`
//! - `GET /calc/{number}`: cached lookup, otherwise naive recursion on
//!   the blocking pool; responds with the result and elapsed seconds
pub mod config;
pub mod database;
pub mod fib;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};
use tracing::info;

use config::Settings;
use database::Cache;
use routes::{calc_handler, ping_handler};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/calc/{number}", get(calc_handler))
        .with_state(state)
}

pub async fn start_server(settings: Settings) -> anyhow::Result<()> {
    info!("Starting Fibonacci service on {}:{}", settings.host, settings.port);

    info!("Initializing cache...");
    let cache = Cache::connect(&settings.redis_url).await?;
    let state = State::new(settings, cache);

    service::serve(app(state.clone()), &state.settings.host, state.settings.port).await?;

    Ok(())
}
