use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::CacheConfig;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error(transparent)]
    Redis(#[from] redis::RedisError),
}

/// Handle to the Redis mailbox used for out-of-band result delivery.
/// Values are written once per key and read back as raw bytes.
#[derive(Clone)]
pub struct ResultCache {
    connection: ConnectionManager,
}

impl ResultCache {
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        let manager_config = ConnectionManagerConfig::new()
            .set_number_of_retries(config.retries)
            .set_connection_timeout(Some(Duration::from_millis(config.connection_timeout_ms)));

        let client = redis::Client::open(config.url.as_str())?;
        let connection = client
            .get_connection_manager_with_config(manager_config)
            .await?;

        info!("Connected result cache at {}", config.url);
        Ok(Self { connection })
    }

    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut connection = self.connection.clone();
        let value = connection.get(key).await?;
        Ok(value)
    }

    pub async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        connection.set::<_, _, ()>(key, value).await?;
        Ok(())
    }
}
