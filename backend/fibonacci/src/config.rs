use serde::Deserialize;
use service::config::{ConfigError, Lookup, Settings as Layered, try_load};

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Empty selects the in-memory cache.
    pub redis_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "INFO".to_string(),
            redis_url: "redis://redis:6379".to_string(),
        }
    }
}

impl Layered for Settings {
    fn apply_env(&mut self, env: Lookup) -> Result<(), ConfigError> {
        try_load(env, "HOST", &mut self.host)?;
        try_load(env, "PORT", &mut self.port)?;
        try_load(env, "LOG_LEVEL", &mut self.log_level)?;
        try_load(env, "REDIS_URL", &mut self.redis_url)
    }
}
