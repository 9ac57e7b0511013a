//! Bulk rokar importer
//!
//! Turns an uploaded spreadsheet into validated ledger rows and upserts them
//! with explicit conflict handling. Four sequential stages, no concurrency:
//!
//! 1. [`sheet`] - read the first worksheet as a rectangular cell grid
//! 2. [`normalize`] - header lookup, date/number cleaning, per-row totals
//! 3. preview - first 50 rows for human confirmation before any write
//! 4. [`upsert`] - keyed insert / skip / overwrite per row, tallied
//!
//! The sheet layout is known but irregular: row 0 is a banner, row 1 holds
//! the headers, data starts at row 2. Monetary cells arrive as numbers,
//! currency-decorated text, or blanks; dates as spreadsheet serials, native
//! date-times, or `D/M/YYYY` text.

pub mod headers;
pub mod normalize;
pub mod sheet;
pub mod upsert;

pub use normalize::{ImportPreview, normalize_rows, preview};
pub use sheet::parse_workbook;
pub use upsert::{ImportSummary, import_rows};

use thiserror::Error;

/// Errors that stop the import before any row is written.
///
/// Per-row failures during the upsert stage are not errors of this type;
/// they are tallied in [`ImportSummary::errors`] and the batch continues.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unreadable workbook: {0}")]
    Workbook(String),

    #[error("Workbook has no sheets")]
    NoSheet,

    #[error("Header row has no DATE column")]
    MissingDateColumn,
}
