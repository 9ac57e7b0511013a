//! Header dictionary for the rokar sheet layout
//!
//! Column labels are matched exactly (after trimming) against the header
//! row. The layout is fixed by the chain's reporting template; sheets with
//! renamed columns simply resolve those cells to zero rather than erroring,
//! matching how the legacy importer behaved.

use std::collections::HashMap;

use calamine::Data;

use super::sheet::cell_text;

// === Canonical column labels ===
pub const COL_DATE: &str = "DATE";
pub const COL_OPENING_BALANCE: &str = "OPENING BALANCE";
pub const COL_CLOSING_BALANCE: &str = "CLOSING BALANCE";
pub const COL_COMPUTER_SALE: &str = "COMPUTER SALE";
pub const COL_MANUAL_SALE: &str = "MANUAL SALE";
pub const COL_MANUAL_BILLED: &str = "MANUAL BILLED";
pub const COL_TOTAL_SALE: &str = "TOTAL SALE";
pub const COL_CUSTOMER_DUES_PAID: &str = "CUSTOMER DUES PAID";
pub const COL_PAYTM: &str = "PAYTM";
pub const COL_PHONEPE: &str = "PHONEPE";
pub const COL_GPAY: &str = "GPAY";
pub const COL_BANK_DEPOSIT: &str = "BANK DEPOSIT";
pub const COL_HOME: &str = "HOME";
pub const COL_DUES_GIVEN: &str = "DUES GIVEN";
pub const COL_TOTAL_CASH_OUT: &str = "TOTAL CASH OUT";
pub const COL_TOTAL_EXPENSE: &str = "TOTAL EXPENSE";
pub const COL_TOTAL_SALARY: &str = "TOTAL SALARY";

/// Fixed expense categories; summed when TOTAL EXPENSE is blank or zero
pub const EXPENSE_COLUMNS: &[&str] = &[
    "RENT",
    "ELECTRICITY BILL",
    "WIFI BILL",
    "TEA EXPENSE",
    "STATIONERY",
    "CLEANING",
    "TRANSPORT",
    "REPAIR",
    "MISC EXPENSE",
];

/// Numbered per-staff salary columns; summed when TOTAL SALARY is absent
pub const SALARY_COLUMNS: &[&str] = &[
    "SALARY 1",
    "SALARY 2",
    "SALARY 3",
    "SALARY 4",
    "SALARY 5",
    "SALARY 6",
    "SALARY 7",
];

/// Header label → column index lookup built from the header row
#[derive(Debug)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    pub fn from_row(row: &[Data]) -> Self {
        let mut columns = HashMap::new();
        for (index, cell) in row.iter().enumerate() {
            let label = cell_text(cell);
            if !label.is_empty() {
                // First occurrence wins on duplicate headers.
                columns.entry(label).or_insert(index);
            }
        }
        Self { columns }
    }

    /// Exact-match column lookup
    pub fn col(&self, label: &str) -> Option<usize> {
        self.columns.get(label).copied()
    }

    pub fn has(&self, label: &str) -> bool {
        self.columns.contains_key(label)
    }
}
