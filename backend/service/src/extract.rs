//! Extractors that reject with [`AppError`] instead of axum's plain-text 400s.
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;

pub struct Query<T>(pub T);

pub struct Path<T>(pub T);

/// Request body extractor and response body in one.
pub struct Json<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Query::<T>::try_from_uri(&parts.uri)
            .map(|axum::extract::Query(value)| Self(value))
            .map_err(|rejection| reject("query", rejection.body_text()))
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Path(value)| Self(value))
            .map_err(|rejection| AppError::invalid("parsing", &["path"], rejection.body_text()))
    }
}

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        axum::Json::<T>::from_request(req, state)
            .await
            .map(|axum::Json(value)| Self(value))
            .map_err(|rejection| reject("body", rejection.body_text()))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Missing fields are named in `loc` after the source.
fn reject(source: &str, msg: String) -> AppError {
    match missing_field(&msg) {
        Some(field) => AppError::invalid("missing", &[source, field], msg.as_str()),
        None => AppError::invalid("parsing", &[source], msg.as_str()),
    }
}

/// Field name out of serde's "missing field `name`" message.
fn missing_field(msg: &str) -> Option<&str> {
    let (_, rest) = msg.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}
