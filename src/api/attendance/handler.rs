//! Attendance handlers
//!
//! A save action overwrites the whole store+date roster. The day fraction is
//! derived server-side from presence and day type; check-in time is
//! auto-captured in the business timezone unless an admin role supplies an
//! explicit override, in which case the who/when/why stamp is recorded.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::auth::permissions::ATTENDANCE_MANAGE;
use crate::auth::{CurrentUser, access};
use crate::core::ServerState;
use crate::db::models::{AttendanceRecord, AttendanceSave, day_fraction};
use crate::db::repository::AttendanceRepository;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, time};

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub store_id: String,
    pub date: String,
}

/// Roster for one store on one date
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<Json<Vec<AttendanceRecord>>> {
    user.require_capability(ATTENDANCE_MANAGE)?;
    user.require_store(&query.store_id)?;
    time::parse_date(&query.date)?;

    let repo = AttendanceRepository::new(state.db.clone());
    let records = repo.find_by_store_date(&query.store_id, &query.date).await?;
    Ok(Json(records))
}

#[derive(Debug, Deserialize)]
pub struct AttendanceSaveRequest {
    pub store_id: String,
    pub date: String,
    pub entries: Vec<AttendanceSave>,
}

#[derive(Debug, Serialize)]
pub struct AttendanceSaveResponse {
    pub saved: usize,
}

/// Save the roster for one store+date, overwriting previous records
pub async fn save(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AttendanceSaveRequest>,
) -> AppResult<Json<AttendanceSaveResponse>> {
    user.require_capability(ATTENDANCE_MANAGE)?;
    user.require_store(&payload.store_id)?;
    let date = time::parse_date(&payload.date)?;
    time::validate_not_future(date, state.config.timezone)?;

    let can_override_time = access::can_edit_attendance_time(Some(&user.profile));
    let repo = AttendanceRepository::new(state.db.clone());
    let mut saved = 0;

    for entry in payload.entries {
        validate_required_text(&entry.staff_id, "staff_id", 254)?;

        // An explicit check-in is a time override; the auto-captured time is
        // the default for everyone else.
        let (check_in, modified_stamp) = match (&entry.check_in, entry.present) {
            (_, false) => (None, None),
            (None, true) => (Some(time::local_hhmm(state.config.timezone)), None),
            (Some(manual), true) => {
                if !can_override_time {
                    return Err(AppError::forbidden(
                        "Only admin roles may edit the check-in time".to_string(),
                    ));
                }
                if let Some(reason) = &entry.time_modified_reason {
                    validate_required_text(reason, "time_modified_reason", MAX_NOTE_LEN)?;
                }
                (Some(manual.clone()), Some(time::now_millis()))
            }
        };

        let record = AttendanceRecord {
            id: None,
            store_id: payload.store_id.clone(),
            date: payload.date.clone(),
            staff_id: entry.staff_id.clone(),
            present: entry.present,
            check_in,
            day_type: entry.day_type,
            day_fraction: day_fraction(entry.present, entry.day_type),
            time_modified_by: modified_stamp.map(|_| user.profile.email.clone()),
            time_modified_at: modified_stamp,
            time_modified_reason: modified_stamp
                .and(entry.time_modified_reason.clone()),
        };

        repo.save(record).await?;
        saved += 1;
    }

    Ok(Json(AttendanceSaveResponse { saved }))
}
