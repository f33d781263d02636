//! Key-value implementation of `StorageContext`

use crate::{profiles, users};
use async_trait::async_trait;
use profiler_core::{
    CreateProfile, KeyValueStore, NewUser, Profile, ProfileFields, ProfileId, Result,
    StorageContext, UpdateProfile, User,
};
use std::sync::Arc;

/// Storage context over any `KeyValueStore` backend
#[derive(Clone)]
pub struct KvStorageContext {
    store: Arc<dyn KeyValueStore>,
}

impl KvStorageContext {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the backing store
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }
}

#[async_trait]
impl StorageContext for KvStorageContext {
    async fn create_profile(&self, id: ProfileId, profile: CreateProfile) -> Result<Profile> {
        profiles::create(self.store(), id, profile).await
    }

    async fn put_profile_fields(&self, id: ProfileId, fields: ProfileFields) -> Result<Profile> {
        profiles::put_fields(self.store(), id, fields).await
    }

    async fn get_profile(&self, id: &ProfileId) -> Result<Profile> {
        profiles::get(self.store(), id).await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        profiles::list_all(self.store()).await
    }

    async fn update_profile(&self, id: &ProfileId, update: UpdateProfile) -> Result<Profile> {
        profiles::update(self.store(), id, update).await
    }

    async fn delete_profile(&self, id: &ProfileId) -> Result<()> {
        profiles::delete(self.store(), id).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        users::create(self.store(), user).await
    }

    async fn get_user_credentials(&self, username: &str) -> Result<Option<(User, String)>> {
        users::get_credentials(self.store(), username).await
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        users::get_all(self.store()).await
    }
}
