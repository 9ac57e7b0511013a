//! Store model
//!
//! Read-only from the back-office perspective; records are provisioned by
//! the chain administration. The record key is the store code (e.g. "ST01"),
//! which is the id every other table refers to.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Store code, mirrors the record key
    pub code: String,
    pub brand: String,
    pub name: String,
    pub city: String,
    /// Owner profile email, if the store is franchise-owned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// Create store payload (provisioning / seeding)
#[derive(Debug, Clone, Deserialize)]
pub struct StoreCreate {
    pub code: String,
    pub brand: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub owner_id: Option<String>,
}
