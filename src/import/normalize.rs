//! Row normalization and preview
//!
//! Maps the raw cell grid onto [`RokarData`] rows using the header
//! dictionary. Rows without a date are skipped; a row with a valid date and
//! all-zero money columns is still a row (a closed day is real data).

use calamine::Data;
use serde::Serialize;

use super::ImportError;
use super::headers::{self, HeaderMap};
use super::sheet::{cell_to_iso_date, clean_number};
use crate::db::models::{PaymentBreakdown, RokarData};

/// Rows shown for human confirmation before anything is written
pub const PREVIEW_LIMIT: usize = 50;

/// Normalize the cell grid into ledger rows.
///
/// Row 0 is the title banner (discarded), row 1 the header row, everything
/// after is data. Fails only when the sheet cannot carry rokar data at all
/// (no DATE column); individual malformed cells degrade to 0 or passthrough
/// per the cell conversion rules.
pub fn normalize_rows(grid: &[Vec<Data>]) -> Result<Vec<RokarData>, ImportError> {
    let header_row = grid.get(1).ok_or(ImportError::MissingDateColumn)?;
    let header_map = HeaderMap::from_row(header_row);
    let date_col = header_map
        .col(headers::COL_DATE)
        .ok_or(ImportError::MissingDateColumn)?;

    let mut rows = Vec::new();
    for row in grid.iter().skip(2) {
        let date_cell = row.get(date_col).unwrap_or(&Data::Empty);
        let Some(date) = cell_to_iso_date(date_cell) else {
            continue;
        };
        rows.push(normalize_row(row, &header_map, date));
    }
    Ok(rows)
}

fn number_at(row: &[Data], header_map: &HeaderMap, label: &str) -> f64 {
    header_map
        .col(label)
        .and_then(|index| row.get(index))
        .map(clean_number)
        .unwrap_or(0.0)
}

fn normalize_row(row: &[Data], header_map: &HeaderMap, date: String) -> RokarData {
    let mut expenses = std::collections::BTreeMap::new();
    for category in headers::EXPENSE_COLUMNS {
        if header_map.has(category) {
            expenses.insert(category.to_string(), number_at(row, header_map, category));
        }
    }

    // Declared total wins; a blank or zero cell falls back to the sum of the
    // named category columns.
    let declared_expense = number_at(row, header_map, headers::COL_TOTAL_EXPENSE);
    let total_expense = if declared_expense != 0.0 {
        declared_expense
    } else {
        expenses.values().sum()
    };

    // Same for salary, except the fallback only applies when the TOTAL
    // SALARY column is missing entirely.
    let total_staff_salary = if header_map.has(headers::COL_TOTAL_SALARY) {
        number_at(row, header_map, headers::COL_TOTAL_SALARY)
    } else {
        headers::SALARY_COLUMNS
            .iter()
            .map(|label| number_at(row, header_map, label))
            .sum()
    };

    RokarData {
        date,
        opening_balance: number_at(row, header_map, headers::COL_OPENING_BALANCE),
        closing_balance: number_at(row, header_map, headers::COL_CLOSING_BALANCE),
        computer_sale: number_at(row, header_map, headers::COL_COMPUTER_SALE),
        manual_sale: number_at(row, header_map, headers::COL_MANUAL_SALE),
        manual_billed: number_at(row, header_map, headers::COL_MANUAL_BILLED),
        total_sale: number_at(row, header_map, headers::COL_TOTAL_SALE),
        customer_dues_paid: number_at(row, header_map, headers::COL_CUSTOMER_DUES_PAID),
        payments: PaymentBreakdown {
            paytm: number_at(row, header_map, headers::COL_PAYTM),
            phonepe: number_at(row, header_map, headers::COL_PHONEPE),
            gpay: number_at(row, header_map, headers::COL_GPAY),
            bank_deposit: number_at(row, header_map, headers::COL_BANK_DEPOSIT),
            home: number_at(row, header_map, headers::COL_HOME),
        },
        dues_given: number_at(row, header_map, headers::COL_DUES_GIVEN),
        total_cash_out: number_at(row, header_map, headers::COL_TOTAL_CASH_OUT),
        expenses,
        total_expense,
        total_staff_salary,
    }
}

/// Preview payload: the first [`PREVIEW_LIMIT`] rows plus the true count.
///
/// The full normalized set is retained by the caller for the commit stage;
/// truncation here is presentation only.
#[derive(Debug, Serialize)]
pub struct ImportPreview {
    pub rows: Vec<RokarData>,
    pub total_rows: usize,
}

pub fn preview(rows: &[RokarData]) -> ImportPreview {
    ImportPreview {
        rows: rows.iter().take(PREVIEW_LIMIT).cloned().collect(),
        total_rows: rows.len(),
    }
}
