//! Attendance model
//!
//! One record per (store, date, staff), overwritten wholesale on each save
//! action for the day. The day fraction is derived, never trusted from the
//! client: 0 when absent, 0.5 for a half day, 1.0 for a full day.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Deterministic record key for one staff member's day.
///
/// The `{storeId}_{date}_{staffId}` format is shared with the legacy data
/// set and must stay bit-exact.
pub fn attendance_key(store_id: &str, date: &str, staff_id: &str) -> String {
    format!("{store_id}_{date}_{staff_id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    Full,
    Half,
}

impl Default for DayType {
    fn default() -> Self {
        DayType::Full
    }
}

/// Derive the day fraction from presence and day type.
///
/// Invariant: absent → 0 regardless of day type; present → 0.5 or 1.0
/// matching the day type.
pub fn day_fraction(present: bool, day_type: DayType) -> f64 {
    if !present {
        return 0.0;
    }
    match day_type {
        DayType::Full => 1.0,
        DayType::Half => 0.5,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub store_id: String,
    pub date: String,
    /// Staff profile email
    pub staff_id: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub present: bool,
    /// HH:MM, auto-captured at save time unless a privileged role overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default)]
    pub day_type: DayType,
    /// Derived: see [`day_fraction`]
    #[serde(default)]
    pub day_fraction: f64,
    // Stamped only when a privileged role overrides the captured time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_modified_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_modified_reason: Option<String>,
}

/// One staff line in a batch attendance save
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceSave {
    pub staff_id: String,
    pub present: bool,
    #[serde(default)]
    pub day_type: DayType,
    /// Explicit check-in override; requires a privileged role. Absent means
    /// auto-capture the current time.
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub time_modified_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_matches_day_type_when_present() {
        assert_eq!(day_fraction(true, DayType::Full), 1.0);
        assert_eq!(day_fraction(true, DayType::Half), 0.5);
    }

    #[test]
    fn fraction_is_zero_when_absent() {
        assert_eq!(day_fraction(false, DayType::Full), 0.0);
        assert_eq!(day_fraction(false, DayType::Half), 0.0);
    }

    #[test]
    fn key_format_is_bit_exact() {
        assert_eq!(
            attendance_key("ST01", "2024-01-05", "staff@chain.example"),
            "ST01_2024-01-05_staff@chain.example"
        );
    }
}
