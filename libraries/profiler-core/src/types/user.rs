/// User domain type
use serde::{Deserialize, Serialize};

/// Login account; the password hash never leaves the storage layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login name, also the store key suffix
    pub username: String,

    /// Free-text role carried into issued tokens
    pub role: String,
}

/// Account to persist, with an already-hashed password
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}
