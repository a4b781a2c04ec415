use std::{sync::Arc, time::Instant};

use axum::extract;
use serde::Serialize;
use service::{AppError, Json, Path};
use tokio::task;
use tracing::debug;

use crate::{
    fib::{MAX_NUMBER, fibonacci},
    state::State,
};

#[derive(Serialize)]
pub struct Pong {
    pub response: &'static str,
}

#[derive(Serialize)]
pub struct CalcResponse {
    pub result: i64,
    /// Seconds spent serving the request, cache lookup included.
    pub time: f64,
}

pub async fn ping_handler() -> Json<Pong> {
    Json(Pong { response: "pong" })
}

pub async fn calc_handler(
    extract::State(state): extract::State<Arc<State>>,
    Path(number): Path<i64>,
) -> Result<Json<CalcResponse>, AppError> {
    let start = Instant::now();

    if number > MAX_NUMBER {
        return Err(AppError::invalid(
            "less_than_equal",
            &["path", "number"],
            format!("Input should be less than or equal to {MAX_NUMBER}"),
        ));
    }

    let result = match state.cache.get(number).await? {
        Some(cached) => {
            debug!(number, "Cache hit");
            cached
        }
        None => {
            debug!(number, "Cache miss, computing");
            let computed = task::spawn_blocking(move || fibonacci(number))
                .await
                .map_err(|e| AppError::InternalError(Box::new(e)))?;

            state.cache.set(number, computed).await?;
            computed
        }
    };

    Ok(Json(CalcResponse {
        result,
        time: start.elapsed().as_secs_f64(),
    }))
}
