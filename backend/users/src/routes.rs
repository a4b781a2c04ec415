use std::sync::Arc;

use axum::{extract, http::StatusCode};
use serde_json::{Value, json};
use service::{AppError, Json, Path};
use tracing::info;

use crate::{
    database::DatabaseError,
    schemas::{UserCreate, UserResponse, UserUpdate},
    state::State,
};

pub async fn root_handler(extract::State(state): extract::State<Arc<State>>) -> Json<Value> {
    Json(json!({
        "message": format!("Welcome to {}!", state.settings.app_name),
        "version": state.settings.app_version,
        "users": "/users/",
        "health": "/healthz",
    }))
}

pub async fn create_user(
    extract::State(state): extract::State<Arc<State>>,
    Json(payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let new_user = payload.validate()?;
    if state.db.user_exists(&new_user.email) {
        return Err(DatabaseError::EmailTaken(new_user.email).into());
    }

    let user = state.db.create_user(new_user)?;

    info!(id = user.id, "Created user");

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn list_users(
    extract::State(state): extract::State<Arc<State>>,
) -> Json<Vec<UserResponse>> {
    Json(
        state
            .db
            .get_all_users()
            .into_iter()
            .map(UserResponse::from)
            .collect(),
    )
}

pub async fn get_user(
    extract::State(state): extract::State<Arc<State>>,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.db.get_user(id).ok_or(DatabaseError::NotFound(id))?;

    Ok(Json(user.into()))
}

pub async fn update_user(
    extract::State(state): extract::State<Arc<State>>,
    Path(id): Path<u64>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserResponse>, AppError> {
    let changes = payload.validate()?;
    let user = state.db.update_user(id, changes)?;

    info!(id, "Updated user");

    Ok(Json(user.into()))
}

pub async fn delete_user(
    extract::State(state): extract::State<Arc<State>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if !state.db.delete_user(id) {
        return Err(DatabaseError::NotFound(id).into());
    }

    info!(id, "Deleted user");

    Ok(StatusCode::NO_CONTENT)
}
