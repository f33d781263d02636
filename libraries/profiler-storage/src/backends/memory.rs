//! In-process key-value store
//!
//! Same hash semantics as the Redis backend, held in a `HashMap` behind an
//! async `RwLock`. Contents are lost when the process exits.

use async_trait::async_trait;
use profiler_core::{FieldMap, KeyValueStore, Result};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, FieldMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn hash_set(&self, key: &str, fields: &FieldMap) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let mut entries = self.entries.write().await;
        entries
            .entry(key.to_string())
            .or_default()
            .extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<FieldMap> {
        Ok(self
            .entries
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
