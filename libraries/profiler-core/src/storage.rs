//! Storage trait for profile records and user accounts

use crate::error::Result;
use crate::types::{
    CreateProfile, NewUser, Profile, ProfileFields, ProfileId, ProfileStats, UpdateProfile, User,
};
use async_trait::async_trait;

/// Storage context providing access to record and user operations
///
/// This trait abstracts storage so the importer and the HTTP layer work the
/// same against Redis or the in-process store.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Profiles
    // ========================================================================

    /// Create a profile, overwriting any existing record with the same id
    async fn create_profile(&self, id: ProfileId, profile: CreateProfile) -> Result<Profile>;

    /// Write the given fields under `id` without requiring the full field set
    async fn put_profile_fields(&self, id: ProfileId, fields: ProfileFields) -> Result<Profile>;

    /// Get a profile by id
    async fn get_profile(&self, id: &ProfileId) -> Result<Profile>;

    /// Get every profile, in no particular order
    async fn list_profiles(&self) -> Result<Vec<Profile>>;

    /// Apply a partial update and return the merged record
    async fn update_profile(&self, id: &ProfileId, update: UpdateProfile) -> Result<Profile>;

    /// Delete a profile; deleting a missing profile succeeds
    async fn delete_profile(&self, id: &ProfileId) -> Result<()>;

    /// Profiles whose id or any field contains `query`, case-insensitively
    async fn search_profiles(&self, query: &str) -> Result<Vec<Profile>> {
        let profiles = self.list_profiles().await?;
        Ok(profiles.into_iter().filter(|p| p.matches(query)).collect())
    }

    /// Counts per occupation and gender over every profile
    async fn profile_stats(&self) -> Result<ProfileStats> {
        let profiles = self.list_profiles().await?;
        Ok(ProfileStats::from_profiles(&profiles))
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Register a user; fails with `Conflict` if the username is taken
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Look up a user and its password hash
    async fn get_user_credentials(&self, username: &str) -> Result<Option<(User, String)>>;

    /// Get all users
    async fn get_all_users(&self) -> Result<Vec<User>>;
}
