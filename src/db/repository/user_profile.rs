//! User profile repository
//!
//! Profiles are keyed by email. Creation seeds the explicit permission map
//! from the role default table, so admin screens always see a complete map;
//! the resolver still falls back to the same table for profiles written
//! before a capability existed.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::auth::permissions;
use crate::db::models::{UserProfile, UserProfileCreate};
use crate::utils::time;

const TABLE: &str = "user_profile";

#[derive(Clone)]
pub struct UserProfileRepository {
    base: BaseRepository,
}

impl UserProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All profiles, active and deactivated, ordered by email
    pub async fn find_all(&self) -> RepoResult<Vec<UserProfile>> {
        let profiles: Vec<UserProfile> = self
            .base
            .db()
            .query("SELECT * FROM user_profile ORDER BY email")
            .await?
            .take(0)?;
        Ok(profiles)
    }

    /// Look up a profile by its email key
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserProfile>> {
        let key = RecordId::from_table_key(TABLE, email);
        let profile: Option<UserProfile> = self.base.db().select(key).await?;
        Ok(profile)
    }

    /// Create a profile, seeding permissions from the role default table.
    ///
    /// Explicit overrides in the payload win over the seeded defaults.
    pub async fn create(
        &self,
        data: UserProfileCreate,
        created_by: &str,
    ) -> RepoResult<UserProfile> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "User '{}' already exists",
                data.email
            )));
        }

        let mut permissions = permissions::seed_permissions(data.role);
        for (capability, granted) in data.permissions {
            if !permissions::is_valid_capability(&capability) {
                return Err(RepoError::Validation(format!(
                    "Unknown capability: {capability}"
                )));
            }
            permissions.insert(capability, granted);
        }

        let profile = UserProfile {
            id: None,
            email: data.email.clone(),
            name: data.name,
            role: data.role,
            stores: data.stores,
            assigned_store: data.assigned_store,
            is_active: true,
            permissions,
            created_at: time::now_millis(),
            created_by: Some(created_by.to_string()),
        };

        let created: Option<UserProfile> = self
            .base
            .db()
            .create((TABLE, data.email.as_str()))
            .content(profile)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user profile".to_string()))
    }

    /// Replace the explicit permission map
    pub async fn set_permissions(
        &self,
        email: &str,
        permissions: std::collections::HashMap<String, bool>,
    ) -> RepoResult<UserProfile> {
        for capability in permissions.keys() {
            if !permissions::is_valid_capability(capability) {
                return Err(RepoError::Validation(format!(
                    "Unknown capability: {capability}"
                )));
            }
        }

        let mut profile = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("User {email} not found")))?;
        profile.permissions = permissions;
        self.replace(email, profile).await
    }

    /// Activate or deactivate an account (profiles are never deleted)
    pub async fn set_active(&self, email: &str, is_active: bool) -> RepoResult<UserProfile> {
        let mut profile = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("User {email} not found")))?;
        profile.is_active = is_active;
        self.replace(email, profile).await
    }

    async fn replace(&self, email: &str, mut profile: UserProfile) -> RepoResult<UserProfile> {
        // The key addresses the record; a serialized id field would clash.
        profile.id = None;
        let key = RecordId::from_table_key(TABLE, email);
        let updated: Option<UserProfile> = self.base.db().update(key).content(profile).await?;
        updated.ok_or_else(|| RepoError::Database("Failed to update user profile".to_string()))
    }
}
