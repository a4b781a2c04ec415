use serde::{Deserialize, Serialize};

use crate::utils::Description;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeatherResponse {
    pub city: String,
    pub temperature: f64,
    pub description: Description,
    pub feels_like: f64,
}

#[derive(Deserialize)]
pub struct ConvertQuery {
    pub celsius: f64,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ConvertResponse {
    pub celsius: f64,
    pub fahrenheit: f64,
}
