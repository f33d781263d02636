//! Profiler Storage
//!
//! Key-value storage layer for profile records and user accounts.
//!
//! # Architecture
//!
//! - **Backends**: `RedisStore` for deployments, `MemoryStore` for tests and
//!   local runs. Both implement `profiler_core::KeyValueStore`.
//! - **Vertical Slicing**: `profiles` and `users` each own their key layout
//!   (`student:<id>`, `user:<username>`) and logic.
//! - **Context**: `KvStorageContext` wires the slices into
//!   `profiler_core::StorageContext`.
//!
//! # Example
//!
//! ```rust,no_run
//! use profiler_storage::{KvStorageContext, RedisOptions, RedisStore};
//! use profiler_core::StorageContext;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RedisStore::connect("redis://127.0.0.1:6379", &RedisOptions::default()).await?;
//! let storage = KvStorageContext::new(Arc::new(store));
//!
//! let profiles = storage.list_profiles().await?;
//! # Ok(())
//! # }
//! ```

mod backends;
mod context;
mod error;

// Vertical slices
pub mod profiles;
pub mod users;

pub use backends::memory::MemoryStore;
pub use backends::redis::{RedisOptions, RedisStore};
pub use context::KvStorageContext;
pub use error::StorageError;
