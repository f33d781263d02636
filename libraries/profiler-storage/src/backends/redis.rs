//! Redis-backed key-value store
//!
//! Each key is a Redis hash. Connections go through a `ConnectionManager`,
//! which reconnects on its own; cloning it is cheap and shares the
//! underlying multiplexed connection.

use crate::error::StorageError;
use async_trait::async_trait;
use profiler_core::{FieldMap, KeyValueStore, Result};
use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, Client,
};
use std::time::Duration;

/// Connection tuning for `RedisStore::connect`
#[derive(Debug, Clone)]
pub struct RedisOptions {
    pub connection_timeout: Duration,
    pub retries: usize,
}

impl Default for RedisOptions {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_millis(500),
            retries: 3,
        }
    }
}

#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    /// Connect to `redis_url` (e.g. `redis://127.0.0.1:6379`)
    pub async fn connect(
        redis_url: &str,
        options: &RedisOptions,
    ) -> std::result::Result<Self, StorageError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(options.retries)
            .set_connection_timeout(options.connection_timeout);

        let client = Client::open(redis_url)
            .map_err(|e| StorageError::Connection(format!("invalid Redis URL: {e}")))?;
        let connection = client
            .get_connection_manager_with_config(config)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        tracing::info!("Connected to Redis");

        Ok(Self { connection })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn hash_set(&self, key: &str, fields: &FieldMap) -> Result<()> {
        // HSET with no field/value pairs is a Redis syntax error
        if fields.is_empty() {
            return Ok(());
        }

        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let mut con = self.connection.clone();
        let _: () = con
            .hset_multiple(key, pairs.as_slice())
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<FieldMap> {
        let mut con = self.connection.clone();
        let fields: FieldMap = con.hgetall(key).await.map_err(StorageError::from)?;
        Ok(fields)
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let mut con = self.connection.clone();
        let keys: Vec<String> = con
            .keys(format!("{prefix}*"))
            .await
            .map_err(StorageError::from)?;
        Ok(keys)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut con = self.connection.clone();
        let _: () = con.del(key).await.map_err(StorageError::from)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
