use serde::Deserialize;
use service::config::{ConfigError, Lookup, Settings as Layered, try_load};

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub debug: bool,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "User Service API".to_string(),
            app_version: "1.0.0".to_string(),
            debug: false,
            log_level: "INFO".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
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
        try_load(env, "APP_VERSION", &mut self.app_version)?;
        try_load(env, "DEBUG", &mut self.debug)?;
        try_load(env, "LOG_LEVEL", &mut self.log_level)?;
        try_load(env, "HOST", &mut self.host)?;
        try_load(env, "PORT", &mut self.port)
    }
}
