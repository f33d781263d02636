/// ID types for profile records
use crate::error::{ProfilerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally supplied profile identifier
///
/// Acts as the store key suffix, so it is immutable once a record exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Parse a user-supplied id, rejecting empty or whitespace-only input
    pub fn parse(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(ProfilerError::validation("id is required"));
        }
        Ok(Self(id.to_string()))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
