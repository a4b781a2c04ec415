use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use service::{Json, Query, health};
use tracing::debug;

use crate::{Assignment, option};

#[derive(Deserialize)]
pub struct OptionQuery {
    pub name: String,
    pub surname: String,
}

#[derive(Serialize)]
pub struct OptionResponse {
    pub name: String,
    pub surname: String,
    pub service: Assignment,
}

pub async fn option_handler(Query(query): Query<OptionQuery>) -> Json<OptionResponse> {
    let service = option(&query.name, &query.surname);
    debug!("{} {} -> {service}", query.name, query.surname);

    Json(OptionResponse {
        name: query.name,
        surname: query.surname,
        service,
    })
}

pub fn app() -> Router {
    health::router().route("/option", get(option_handler))
}
