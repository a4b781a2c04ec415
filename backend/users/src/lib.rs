//! # Users
//!
//! Day 2. A CRUD service over an in-memory user table.
//!
//! ## Routes
//!
//! - `GET /`: welcome message and links
//! - `POST /users/`: create, 201 (400 on a taken email, 422 on bad input)
//! - `GET /users/`: list in id order
//! - `GET /users/{id}`: fetch, 404 if absent
//! - `PATCH /users/{id}`: partial update, only the fields sent change
//! - `DELETE /users/{id}`: 204, 404 if absent
use std::sync::Arc;

use axum::{Router, routing::get};
use service::health;
use tracing::info;

pub mod config;
pub mod database;
pub mod routes;
pub mod schemas;
pub mod state;

use config::Settings;
use routes::{create_user, delete_user, get_user, list_users, root_handler, update_user};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .merge(health::router())
        .with_state(state)
}

pub async fn start_server(settings: Settings) -> std::io::Result<()> {
    info!(
        "Starting {} v{} on {}:{}",
        settings.app_name, settings.app_version, settings.host, settings.port
    );

    let state = State::new(settings);
    let result = service::serve(app(state.clone()), &state.settings.host, state.settings.port).await;

    state.db.close();

    result
}
