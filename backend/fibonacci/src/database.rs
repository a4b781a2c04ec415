//! # Cache
//!
//! Memoized results of `/calc`, keyed by the input number.
//!
//! - Redis through a `ConnectionManager`: one retry, 100ms connect timeout
//! - Process memory when no Redis URL is configured (and in tests)
//!
//! Entries never expire.
use std::{collections::HashMap, time::Duration};

use parking_lot::Mutex;
use redis::{
    AsyncCommands, Client, RedisError,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use service::AppError;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),
}

impl From<CacheError> for AppError {
    fn from(error: CacheError) -> Self {
        AppError::InternalError(Box::new(error))
    }
}

pub enum Cache {
    Redis(ConnectionManager),
    Memory(Mutex<HashMap<i64, i64>>),
}

impl Cache {
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        if redis_url.is_empty() {
            info!("No Redis URL configured, caching in memory");
            return Ok(Self::memory());
        }

        info!("Connecting to Redis at {redis_url}");
        Ok(Self::Redis(init_redis(redis_url).await?))
    }

    pub fn memory() -> Self {
        Self::Memory(Mutex::new(HashMap::new()))
    }

    pub async fn get(&self, number: i64) -> Result<Option<i64>, CacheError> {
        match self {
            Cache::Redis(manager) => {
                let mut connection = manager.clone();
                Ok(connection.get(number).await?)
            }
            Cache::Memory(map) => Ok(map.lock().get(&number).copied()),
        }
    }

    pub async fn set(&self, number: i64, result: i64) -> Result<(), CacheError> {
        match self {
            Cache::Redis(manager) => {
                let mut connection = manager.clone();
                connection.set::<_, _, ()>(number, result).await?;
            }
            Cache::Memory(map) => {
                map.lock().insert(number, result);
            }
        }

        Ok(())
    }
}

pub async fn init_redis(redis_url: &str) -> Result<ConnectionManager, RedisError> {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url)?;

    client.get_connection_manager_with_config(config).await
}
