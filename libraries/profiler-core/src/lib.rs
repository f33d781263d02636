//! Profiler Core
//!
//! Storage-agnostic domain types, traits, and error handling for the
//! resident profiling system.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Profile`, `CreateProfile`, `UpdateProfile`, `User`
//! - **Core Traits**: `KeyValueStore` (raw field-map storage) and `StorageContext`
//!   (record and user operations built on top of it)
//! - **Error Handling**: Unified `ProfilerError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use profiler_core::types::{CreateProfile, ProfileId};
//!
//! let id = ProfileId::parse("42").unwrap();
//! let create = CreateProfile {
//!     name: Some("Alice".into()),
//!     gender: Some("F".into()),
//!     age: Some("31".into()),
//!     address: Some("Main St".into()),
//!     occupation: Some("Nurse".into()),
//!     religion: Some("None".into()),
//!     status: Some("Single".into()),
//! };
//! let fields = create.validate().unwrap();
//! assert_eq!(fields.get("name"), Some("Alice"));
//! assert_eq!(id.as_str(), "42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{ProfilerError, Result};
pub use storage::StorageContext;
pub use traits::{FieldMap, KeyValueStore};

pub use types::{
    deserialize_text_or_number, CreateProfile, NewUser, Profile, ProfileFields, ProfileId,
    ProfileStats, UpdateProfile, User, PROFILE_FIELDS,
};
