//! Attendance repository
//!
//! Records are overwritten wholesale per save action for a given store+date,
//! keyed `{storeId}_{date}_{staffId}`.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{AttendanceRecord, attendance_key};

const TABLE: &str = "attendance";

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All staff records for one store on one date
    pub async fn find_by_store_date(
        &self,
        store_id: &str,
        date: &str,
    ) -> RepoResult<Vec<AttendanceRecord>> {
        let records: Vec<AttendanceRecord> = self
            .base
            .db()
            .query(
                "SELECT * FROM attendance \
                 WHERE store_id = $store_id AND date = $date \
                 ORDER BY staff_id",
            )
            .bind(("store_id", store_id.to_string()))
            .bind(("date", date.to_string()))
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Create-or-replace one staff member's day
    pub async fn save(&self, mut record: AttendanceRecord) -> RepoResult<AttendanceRecord> {
        record.id = None;
        let key = RecordId::from_table_key(
            TABLE,
            attendance_key(&record.store_id, &record.date, &record.staff_id),
        );
        let saved: Option<AttendanceRecord> =
            self.base.db().upsert(key).content(record).await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save attendance".to_string()))
    }
}
