//! # Upstreams
//!
//! Two keyless public APIs, called in sequence:
//!
//! 1. Nominatim `search?q=<city>&format=json&limit=1` resolves the city to
//!    coordinates. Nominatim rejects requests without a real User-Agent.
//! 2. Open-Meteo `forecast` returns the current temperature and apparent
//!    temperature at those coordinates.
//!
//! An empty geocoding result or an Open-Meteo 400 means the city is
//! unknown (404). Other upstream failures are 502s.
use reqwest::{Client, StatusCode, header::USER_AGENT};
use serde::Deserialize;
use service::AppError;
use tracing::debug;
use weather::services::upstream;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

pub const CURRENT_FIELDS: &str = "temperature_2m,weather_code,apparent_temperature";

#[derive(Deserialize, Debug)]
pub struct Place {
    pub lat: String,
    pub lon: String,
}

#[derive(Deserialize, Debug)]
pub struct Forecast {
    pub current: Current,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Current {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    #[serde(default)]
    pub weather_code: Option<i64>,
}

#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl WeatherClient {
    pub fn new(geocoding_url: impl Into<String>, forecast_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    pub async fn fetch(&self, city: &str) -> Result<Current, AppError> {
        let (latitude, longitude) = self.coordinates(city).await?;
        debug!("{city} resolved to ({latitude}, {longitude})");

        let response = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(upstream)?;

        if response.status() == StatusCode::BAD_REQUEST {
            return Err(not_found(city));
        }

        let forecast: Forecast = response
            .error_for_status()
            .map_err(upstream)?
            .json()
            .await
            .map_err(upstream)?;

        Ok(forecast.current)
    }

    async fn coordinates(&self, city: &str) -> Result<(f64, f64), AppError> {
        let places: Vec<Place> = self
            .http
            .get(&self.geocoding_url)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(upstream)?
            .error_for_status()
            .map_err(upstream)?
            .json()
            .await
            .map_err(upstream)?;

        let place = places.into_iter().next().ok_or_else(|| not_found(city))?;

        Ok((parse_coordinate(&place.lat)?, parse_coordinate(&place.lon)?))
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, AppError> {
    raw.parse()
        .map_err(|_| AppError::Upstream(format!("Malformed coordinate {raw:?}")))
}

fn not_found(city: &str) -> AppError {
    AppError::NotFound(format!("City '{city}' not found"))
}
