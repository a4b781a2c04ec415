//! Liveness probe. The day-1 template ships nothing else.
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::extract::Json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Health {
    pub status: String,
}

pub async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// `GET /healthz`.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", get(health_handler))
}
