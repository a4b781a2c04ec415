use serde::Deserialize;
use service::config::{ConfigError, Lookup, Settings as Layered, try_load};

pub const DEFAULT_API_URL: &str = "https://api.weatherapi.com/v1/current.json";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub api_url: String,
    pub api_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "INFO".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl Layered for Settings {
    fn apply_env(&mut self, env: Lookup) -> Result<(), ConfigError> {
        try_load(env, "HOST", &mut self.host)?;
        try_load(env, "PORT", &mut self.port)?;
        try_load(env, "LOG_LEVEL", &mut self.log_level)?;
        try_load(env, "API_URL", &mut self.api_url)?;
        try_load(env, "API_KEY", &mut self.api_key)
    }
}
