//! Rokar ledger repository
//!
//! All writes go through [`RokarRepository::upsert_entry`], which implements
//! the overwrite-or-skip conflict semantics on the deterministic
//! `{storeId}_{date}` key. Both the bulk importer and the manual-entry
//! endpoint share it, so conflict behavior cannot diverge between the two.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{RokarData, RokarEntry, rokar_key};
use crate::utils::time;

const TABLE: &str = "rokar";

/// Outcome of a single keyed upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Overwritten,
    Skipped,
}

#[derive(Clone)]
pub struct RokarRepository {
    base: BaseRepository,
}

impl RokarRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Look up one ledger day by its composite key
    pub async fn find_by_key(&self, store_id: &str, date: &str) -> RepoResult<Option<RokarEntry>> {
        let key = RecordId::from_table_key(TABLE, rokar_key(store_id, date));
        let entry: Option<RokarEntry> = self.base.db().select(key).await?;
        Ok(entry)
    }

    /// Ledger days for a store within an inclusive date range, oldest first
    pub async fn find_range(
        &self,
        store_id: &str,
        from: &str,
        to: &str,
    ) -> RepoResult<Vec<RokarEntry>> {
        let entries: Vec<RokarEntry> = self
            .base
            .db()
            .query(
                "SELECT * FROM rokar \
                 WHERE store_id = $store_id AND date >= $from AND date <= $to \
                 ORDER BY date",
            )
            .bind(("store_id", store_id.to_string()))
            .bind(("from", from.to_string()))
            .bind(("to", to.to_string()))
            .await?
            .take(0)?;
        Ok(entries)
    }

    /// Insert-or-conflict for one ledger day.
    ///
    /// Absent → insert with `created_at` and importer attribution. Present
    /// without overwrite → skip, nothing written. Present with overwrite →
    /// whole-document replace (fields absent from the new payload are
    /// dropped, deliberately - the legacy data set behaves the same way) with
    /// `updated_at` stamped and the original `created_at` preserved.
    pub async fn upsert_entry(
        &self,
        store_id: &str,
        data: RokarData,
        overwrite: bool,
        imported_by: &str,
    ) -> RepoResult<UpsertOutcome> {
        if store_id.trim().is_empty() {
            return Err(RepoError::Validation("No store selected".to_string()));
        }

        let key = RecordId::from_table_key(TABLE, rokar_key(store_id, &data.date));
        let existing: Option<RokarEntry> = self.base.db().select(key.clone()).await?;
        let now = time::now_millis();

        match existing {
            None => {
                let entry = RokarEntry::new(store_id, data, imported_by, now);
                let created: Option<RokarEntry> =
                    self.base.db().create(key).content(entry).await?;
                created.ok_or_else(|| {
                    RepoError::Database("Failed to create rokar entry".to_string())
                })?;
                Ok(UpsertOutcome::Inserted)
            }
            Some(_) if !overwrite => Ok(UpsertOutcome::Skipped),
            Some(previous) => {
                let entry = RokarEntry::replacement(
                    store_id,
                    data,
                    imported_by,
                    previous.created_at,
                    now,
                );
                let updated: Option<RokarEntry> =
                    self.base.db().update(key).content(entry).await?;
                updated.ok_or_else(|| {
                    RepoError::Database("Failed to overwrite rokar entry".to_string())
                })?;
                Ok(UpsertOutcome::Overwritten)
            }
        }
    }
}
