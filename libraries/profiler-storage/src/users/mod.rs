//! User accounts and credentials
//!
//! Stored at `user:<username>` with the fields `password` (bcrypt hash) and
//! `role`. Hashing happens in the server's auth service, never here.

use profiler_core::{FieldMap, KeyValueStore, NewUser, ProfilerError, Result, User};

/// Key namespace for user accounts
pub const KEY_PREFIX: &str = "user:";

const PASSWORD_FIELD: &str = "password";
const ROLE_FIELD: &str = "role";

fn key(username: &str) -> String {
    format!("{KEY_PREFIX}{username}")
}

/// Store a new user
///
/// # Errors
///
/// `Validation` for a blank username or hash, `Conflict` if the username is taken
pub async fn create(store: &dyn KeyValueStore, user: NewUser) -> Result<User> {
    let username = user.username.trim();
    if username.is_empty() || user.password_hash.is_empty() {
        return Err(ProfilerError::validation(
            "username and password are required",
        ));
    }

    let key = key(username);
    if !store.hash_get_all(&key).await?.is_empty() {
        return Err(ProfilerError::conflict(format!(
            "user {username} already exists"
        )));
    }

    let mut fields = FieldMap::new();
    fields.insert(PASSWORD_FIELD.to_string(), user.password_hash);
    fields.insert(ROLE_FIELD.to_string(), user.role.clone());
    store.hash_set(&key, &fields).await?;

    Ok(User {
        username: username.to_string(),
        role: user.role,
    })
}

/// Get a user's record and password hash for authentication
///
/// Returns `None` if the user does not exist or has no credentials
pub async fn get_credentials(
    store: &dyn KeyValueStore,
    username: &str,
) -> Result<Option<(User, String)>> {
    let mut fields = store.hash_get_all(&key(username)).await?;

    let Some(password_hash) = fields.remove(PASSWORD_FIELD) else {
        return Ok(None);
    };

    let user = User {
        username: username.to_string(),
        role: fields.remove(ROLE_FIELD).unwrap_or_default(),
    };

    Ok(Some((user, password_hash)))
}

/// Get all users, ordered by username
pub async fn get_all(store: &dyn KeyValueStore) -> Result<Vec<User>> {
    let keys = store.keys_with_prefix(KEY_PREFIX).await?;
    let mut users = Vec::with_capacity(keys.len());

    for key in keys {
        let Some(username) = key.strip_prefix(KEY_PREFIX) else {
            continue;
        };

        let mut fields = store.hash_get_all(&key).await?;
        if fields.is_empty() {
            continue;
        }

        users.push(User {
            username: username.to_string(),
            role: fields.remove(ROLE_FIELD).unwrap_or_default(),
        });
    }

    users.sort_by(|a, b| a.username.cmp(&b.username));
    Ok(users)
}
