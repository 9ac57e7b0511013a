//! Rokar ledger model
//!
//! One record per (store, calendar date) - the daily cash book. The record
//! key is the deterministic composite `{storeId}_{date}`, which is what makes
//! re-imports idempotent. Saved history is immutable except through a
//! deliberate overwrite.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Deterministic record key for a ledger day.
///
/// The `{storeId}_{date}` format is shared with the legacy data set and must
/// stay bit-exact.
pub fn rokar_key(store_id: &str, date: &str) -> String {
    format!("{store_id}_{date}")
}

/// Digital/cash payment breakdown for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    #[serde(default)]
    pub paytm: f64,
    #[serde(default)]
    pub phonepe: f64,
    #[serde(default)]
    pub gpay: f64,
    #[serde(default)]
    pub bank_deposit: f64,
    #[serde(default)]
    pub home: f64,
}

/// The day's ledger figures, independent of which store they belong to.
///
/// This is the normalized shape the importer produces and the manual-entry
/// endpoint accepts; [`RokarEntry`] adds storage identity and attribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RokarData {
    /// ISO `YYYY-MM-DD`. May carry a raw passthrough string when the source
    /// sheet held an unparseable date (legacy lenient behavior).
    pub date: String,
    #[serde(default)]
    pub opening_balance: f64,
    #[serde(default)]
    pub closing_balance: f64,
    #[serde(default)]
    pub computer_sale: f64,
    #[serde(default)]
    pub manual_sale: f64,
    #[serde(default)]
    pub manual_billed: f64,
    #[serde(default)]
    pub total_sale: f64,
    #[serde(default)]
    pub customer_dues_paid: f64,
    #[serde(default)]
    pub payments: PaymentBreakdown,
    #[serde(default)]
    pub dues_given: f64,
    #[serde(default)]
    pub total_cash_out: f64,
    /// Fixed expense category name → amount
    #[serde(default)]
    pub expenses: BTreeMap<String, f64>,
    #[serde(default)]
    pub total_expense: f64,
    #[serde(default)]
    pub total_staff_salary: f64,
}

/// Rokar entry as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RokarEntry {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub store_id: String,
    #[serde(flatten)]
    pub data: RokarData,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// Email of the operator who imported or entered the row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported_by: Option<String>,
}

impl RokarEntry {
    /// Assemble a fresh entry for insertion
    pub fn new(store_id: &str, data: RokarData, imported_by: &str, now: i64) -> Self {
        Self {
            id: None,
            store_id: store_id.to_string(),
            data,
            created_at: now,
            updated_at: None,
            imported_by: Some(imported_by.to_string()),
        }
    }

    /// Assemble a full replacement for an existing entry.
    ///
    /// Overwrite replaces the whole document (no merge): fields absent from
    /// the re-import payload are dropped, and `updated_at` is stamped.
    pub fn replacement(
        store_id: &str,
        data: RokarData,
        imported_by: &str,
        created_at: i64,
        now: i64,
    ) -> Self {
        Self {
            id: None,
            store_id: store_id.to_string(),
            data,
            created_at,
            updated_at: Some(now),
            imported_by: Some(imported_by.to_string()),
        }
    }
}
