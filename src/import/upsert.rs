//! Batched upsert stage
//!
//! One existence-check-then-write round trip per row, sequentially awaited.
//! This bounds peak load on the storage engine and keeps the tally accurate;
//! throughput scales linearly with row count, which is acceptable for
//! month-sized sheets. Per-row failures never abort the batch.

use serde::Serialize;

use crate::db::models::RokarData;
use crate::db::repository::{RokarRepository, UpsertOutcome};

/// Per-outcome tally for one import run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub inserted: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Upsert every normalized row against the target store.
///
/// Conflict semantics per row: absent → insert; present without overwrite →
/// skip; present with overwrite → whole-document replace. A failed row is
/// logged, tallied under `errors`, and the batch continues.
pub async fn import_rows(
    repo: &RokarRepository,
    store_id: &str,
    rows: Vec<RokarData>,
    overwrite: bool,
    imported_by: &str,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for row in rows {
        let date = row.date.clone();
        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            // Legacy lenient dates survive normalization as raw strings;
            // make the leniency visible when they reach storage.
            tracing::warn!(store_id, date = %date, "Importing row with non-ISO date key");
        }

        match repo.upsert_entry(store_id, row, overwrite, imported_by).await {
            Ok(UpsertOutcome::Inserted) => summary.inserted += 1,
            Ok(UpsertOutcome::Overwritten) => summary.overwritten += 1,
            Ok(UpsertOutcome::Skipped) => summary.skipped += 1,
            Err(e) => {
                tracing::warn!(store_id, date = %date, error = %e, "Failed to import rokar row");
                summary.errors += 1;
            }
        }
    }

    summary
}
