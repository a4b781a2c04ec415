//! Layered settings: defaults < TOML file < environment.
//!
//! Environment lookups go through a [`Lookup`] instead of reading the
//! process environment directly, so callers (and tests) decide where
//! values come from.
use std::{
    env,
    fmt::Display,
    fs::read_to_string,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Env var that points a service at a different config file.
pub const CONFIG_PATH: &str = "CONFIG_PATH";

pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid {key} value: {reason}")]
    Invalid { key: String, reason: String },
}

/// Settings that can be overridden from the environment after the file layer.
pub trait Settings: DeserializeOwned + Default {
    fn apply_env(&mut self, env: Lookup) -> Result<(), ConfigError>;
}

pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Load `T` from `default_path` (or `$CONFIG_PATH`), then apply env overrides.
pub fn load<T: Settings>(default_path: &str, env: Lookup) -> Result<T, ConfigError> {
    let path = env(CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_path));

    let mut settings: T = load_file(&path)?;
    settings.apply_env(env)?;

    Ok(settings)
}

/// A missing file yields `T::default()`; a malformed one is an error.
pub fn load_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    match read_to_string(path) {
        Ok(text) => toml::from_str(&text).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("{} not found, using defaults", path.display());
            Ok(T::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Overwrite `target` with the parsed value of `key`, if set.
pub fn try_load<T: FromStr>(env: Lookup, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    T::Err: Display,
{
    let Some(raw) = env(key) else {
        debug!("{key} not set, keeping configured value");
        return Ok(());
    };

    *target = raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, fs};

    use serde::Deserialize;
    use tempfile::TempDir;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    #[serde(default)]
    struct Demo {
        host: String,
        port: u16,
        debug: bool,
    }

    impl Default for Demo {
        fn default() -> Self {
            Self {
                host: "0.0.0.0".to_string(),
                port: 8000,
                debug: false,
            }
        }
    }

    impl Settings for Demo {
        fn apply_env(&mut self, env: Lookup) -> Result<(), ConfigError> {
            try_load(env, "HOST", &mut self.host)?;
            try_load(env, "PORT", &mut self.port)?;
            try_load(env, "DEBUG", &mut self.debug)
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let env: HashMap<String, String> = HashMap::new();

        let demo: Demo = load(
            dir.path().join("absent.toml").to_str().unwrap(),
            &|k| env.get(k).cloned(),
        )
        .unwrap();

        assert_eq!(demo, Demo::default());
    }

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "host = \"127.0.0.1\"\nport = 9000\n").unwrap();

        let env = vars(&[("PORT", "9100")]);
        let demo: Demo = load(path.to_str().unwrap(), &|k| env.get(k).cloned()).unwrap();

        assert_eq!(demo.host, "127.0.0.1");
        assert_eq!(demo.port, 9100);
        assert!(!demo.debug);
    }

    #[test]
    fn config_path_env_redirects_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.toml");
        fs::write(&path, "debug = true\n").unwrap();

        let env = vars(&[(CONFIG_PATH, path.to_str().unwrap())]);
        let demo: Demo = load("does-not-exist.toml", &|k| env.get(k).cloned()).unwrap();

        assert!(demo.debug);
    }

    #[test]
    fn invalid_env_value_names_the_key() {
        let env = vars(&[("PORT", "eighty")]);
        let mut demo = Demo::default();

        let err = demo.apply_env(&|k| env.get(k).cloned()).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "PORT"));
        assert_eq!(demo.port, 8000);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "port = \"not a number\"").unwrap();

        let result = load_file::<Demo>(&path);

        assert!(matches!(result, Err(ConfigError::Malformed { .. })));
    }
}
