//! Core traits
//!
//! `KeyValueStore` is the seam between the record logic and the backing
//! store. Every key holds a flat map of field name to text value, the same
//! shape as a Redis hash.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Field map stored under a single key
pub type FieldMap = BTreeMap<String, String>;

/// Hash-oriented key-value storage
///
/// Implementations must be safe to share between concurrent requests.
/// Concurrent writes to the same key interleave at field granularity:
/// last write wins per field, not per key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Write every `(field, value)` pair under `key` in a single command,
    /// leaving other fields of the key untouched
    async fn hash_set(&self, key: &str, fields: &FieldMap) -> Result<()>;

    /// Read every field stored under `key`; empty when the key does not exist
    async fn hash_get_all(&self, key: &str) -> Result<FieldMap>;

    /// Enumerate keys starting with `prefix`, in no particular order
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Remove `key` and all of its fields; succeeds when the key is absent
    async fn delete(&self, key: &str) -> Result<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}
