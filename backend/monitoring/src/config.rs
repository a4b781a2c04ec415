use serde::Deserialize;
use service::config::{ConfigError, Lookup, Settings as Layered, try_load};

pub const GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub version: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub debug: bool,
    pub log_level: String,
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "monitoring-example".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: "local".to_string(),
            debug: false,
            log_level: "INFO".to_string(),
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
        }
    }
}

impl Settings {
    /// `debug` lifts logging to debug regardless of `log_level`.
    pub fn log_filter(&self) -> &str {
        if self.debug { "debug" } else { self.log_level.as_str() }
    }
}

impl Layered for Settings {
    fn apply_env(&mut self, env: Lookup) -> Result<(), ConfigError> {
        try_load(env, "APP_NAME", &mut self.app_name)?;
        try_load(env, "VERSION", &mut self.version)?;
        try_load(env, "HOST", &mut self.host)?;
        try_load(env, "PORT", &mut self.port)?;
        try_load(env, "ENVIRONMENT", &mut self.environment)?;
        try_load(env, "DEBUG", &mut self.debug)?;
        try_load(env, "LOG_LEVEL", &mut self.log_level)?;
        try_load(env, "GEOCODING_URL", &mut self.geocoding_url)?;
        try_load(env, "FORECAST_URL", &mut self.forecast_url)
    }
}
