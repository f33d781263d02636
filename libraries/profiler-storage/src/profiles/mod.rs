//! Profile record operations
//!
//! Every record lives at `student:<id>` as a hash of field name to text.
//! The id is the key suffix and is not stored as a field.
//!
//! A create or import writes all of its fields with one HSET. An update
//! reads the record first and then writes only the supplied fields, so two
//! concurrent updates of the same record resolve last-write-wins per field.

use profiler_core::{
    CreateProfile, KeyValueStore, Profile, ProfileFields, ProfileId, ProfilerError, Result,
    UpdateProfile,
};

/// Key namespace for profile records
pub const KEY_PREFIX: &str = "student:";

/// Store key of a profile
pub fn key(id: &ProfileId) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// Validate and write a complete profile, overwriting an existing one
pub async fn create(
    store: &dyn KeyValueStore,
    id: ProfileId,
    profile: CreateProfile,
) -> Result<Profile> {
    let fields = profile.validate()?;
    put_fields(store, id, fields).await
}

/// Write the given fields under `id`, leaving any other stored fields as they are
pub async fn put_fields(
    store: &dyn KeyValueStore,
    id: ProfileId,
    fields: ProfileFields,
) -> Result<Profile> {
    if fields.is_empty() {
        return Err(ProfilerError::validation(
            "at least one field is required",
        ));
    }

    store.hash_set(&key(&id), fields.as_map()).await?;
    Ok(Profile::new(id, fields))
}

/// Get a profile by id
pub async fn get(store: &dyn KeyValueStore, id: &ProfileId) -> Result<Profile> {
    let fields = store.hash_get_all(&key(id)).await?;
    if fields.is_empty() {
        return Err(ProfilerError::not_found("Profile", id.as_str()));
    }

    Ok(Profile::new(id.clone(), fields.into()))
}

/// Get every profile in key enumeration order
pub async fn list_all(store: &dyn KeyValueStore) -> Result<Vec<Profile>> {
    let keys = store.keys_with_prefix(KEY_PREFIX).await?;
    let mut profiles = Vec::with_capacity(keys.len());

    for key in keys {
        let Some(id) = key
            .strip_prefix(KEY_PREFIX)
            .and_then(|suffix| ProfileId::parse(suffix).ok())
        else {
            tracing::warn!("Skipping malformed profile key: {}", key);
            continue;
        };

        let fields = store.hash_get_all(&key).await?;
        // Deleted between enumeration and fetch
        if fields.is_empty() {
            continue;
        }

        profiles.push(Profile::new(id, fields.into()));
    }

    Ok(profiles)
}

/// Write only the supplied fields of an existing profile
pub async fn update(
    store: &dyn KeyValueStore,
    id: &ProfileId,
    update: UpdateProfile,
) -> Result<Profile> {
    let fields = update.into_fields();
    if fields.is_empty() {
        return Err(ProfilerError::validation(
            "At least one field is required to update",
        ));
    }

    let mut profile = get(store, id).await?;
    store.hash_set(&key(id), fields.as_map()).await?;
    profile.fields.merge(fields);

    Ok(profile)
}

/// Remove a profile; a missing profile is not an error
pub async fn delete(store: &dyn KeyValueStore, id: &ProfileId) -> Result<()> {
    store.delete(&key(id)).await
}
