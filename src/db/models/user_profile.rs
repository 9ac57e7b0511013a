//! User profile model
//!
//! One record per person, keyed by email. Profiles are never deleted, only
//! deactivated, so history stays attributable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::auth::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Unique key; also the record key
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Store membership: store id → member flag. Only `true` entries count.
    #[serde(default)]
    pub stores: HashMap<String, bool>,
    /// Legacy single-store assignment, folded into the membership set by the
    /// access resolver. Kept for profiles created before multi-store support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_store: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    /// Explicit capability grants overriding the role defaults
    #[serde(default)]
    pub permissions: HashMap<String, bool>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Create user payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfileCreate {
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub stores: HashMap<String, bool>,
    #[serde(default)]
    pub assigned_store: Option<String>,
    /// Optional capability overrides applied on top of the role defaults
    #[serde(default)]
    pub permissions: HashMap<String, bool>,
}
