//! # WeatherAPI
//!
//! `GET {api_url}?key=..&q=<city>` answers with the current conditions.
//! Only two fields are read:
//!
//! - `current.temp_c`
//! - `current.feelslike_c`
//!
//! WeatherAPI signals an unknown location with a 400, which becomes a 404
//! here. Anything else that goes wrong upstream is a 502.
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use service::AppError;
use tracing::debug;

#[derive(Deserialize, Debug)]
pub struct Response {
    pub current: Current,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Current {
    pub temp_c: f64,
    pub feelslike_c: f64,
}

#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn current(&self, city: &str) -> Result<Current, AppError> {
        debug!("Fetching current weather for {city}");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(upstream)?;

        if response.status() == StatusCode::BAD_REQUEST {
            return Err(AppError::NotFound(format!("City '{city}' not found")));
        }

        let body: Response = response
            .error_for_status()
            .map_err(upstream)?
            .json()
            .await
            .map_err(upstream)?;

        Ok(body.current)
    }
}

pub fn upstream(error: reqwest::Error) -> AppError {
    AppError::Upstream(error.to_string())
}
