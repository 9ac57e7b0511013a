//! Database models
//!
//! Record structs matching the SurrealDB tables plus their create/update
//! payloads. Record keys are deterministic business keys (email, store code,
//! `{storeId}_{date}`), not generated ids.

pub mod attendance;
pub mod rokar;
pub mod serde_helpers;
pub mod store;
pub mod user_profile;

pub use attendance::{
    AttendanceRecord, AttendanceSave, DayType, attendance_key, day_fraction,
};
pub use rokar::{PaymentBreakdown, RokarData, RokarEntry, rokar_key};
pub use store::{Store, StoreCreate};
pub use user_profile::{UserProfile, UserProfileCreate};
