//! Workbook reading and cell conversion
//!
//! Only the first worksheet is read. Cell-level conversions live here:
//! text extraction, the three date encodings, and the uniform numeric
//! cleaning rule for monetary columns.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use chrono::{Days, NaiveDate};

use super::ImportError;

/// Day 0 of the spreadsheet serial date system (Excel 1900 mode)
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Read the first worksheet of an uploaded workbook as a rectangular grid.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<Vec<Data>>, ImportError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| ImportError::Workbook(e.to_string()))?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoSheet)?;
    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| ImportError::Workbook(e.to_string()))?;

    Ok(range.rows().map(|row| row.to_vec()).collect())
}

/// Trimmed text content of a cell
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Convert a date cell to an ISO `YYYY-MM-DD` string.
///
/// Returns `None` for an empty cell (the row is skipped). Supports the three
/// encodings seen in the field: spreadsheet serial codes, native date-time
/// cells, and `D/M/YYYY` or `D-M-YYYY` text with 2-digit years expanded by
/// prefixing `20`. Unparseable text passes through trimmed - legacy lenient
/// behavior the downstream data set tolerates.
pub fn cell_to_iso_date(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::Float(serial) => Some(serial_to_iso(*serial).unwrap_or_else(|| serial.to_string())),
        Data::Int(serial) => {
            Some(serial_to_iso(*serial as f64).unwrap_or_else(|| serial.to_string()))
        }
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            Some(serial_to_iso(serial).unwrap_or_else(|| serial.to_string()))
        }
        Data::DateTimeIso(s) => {
            let trimmed = s.trim();
            // ISO date-times carry the date in the first 10 chars.
            let date_part = trimmed.get(..10).unwrap_or(trimmed);
            if NaiveDate::parse_from_str(date_part, "%Y-%m-%d").is_ok() {
                Some(date_part.to_string())
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(text_to_iso(trimmed).unwrap_or_else(|| trimmed.to_string()))
        }
        other => {
            let text = cell_text(other);
            if text.is_empty() { None } else { Some(text) }
        }
    }
}

/// Spreadsheet serial code → ISO date (standard 1900-mode epoch)
fn serial_to_iso(serial: f64) -> Option<String> {
    if !serial.is_finite() || serial < 1.0 || serial > 200_000.0 {
        return None;
    }
    let (y, m, d) = SERIAL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
    let date = epoch.checked_add_days(Days::new(serial.trunc() as u64))?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// `D/M/YYYY` or `D-M-YYYY` text → ISO date; 2-digit years become `20YY`
fn text_to_iso(text: &str) -> Option<String> {
    let separator = if text.contains('/') {
        '/'
    } else if text.contains('-') {
        '-'
    } else {
        return None;
    };

    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year_text = parts[2];
    let year: i32 = if year_text.len() == 2 {
        format!("20{year_text}").parse().ok()?
    } else {
        year_text.parse().ok()?
    };

    // Reject impossible calendar dates so they fall back to passthrough.
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Uniform numeric cleaning for monetary cells.
///
/// Strips thousands separators, currency symbols and stray whitespace, then
/// parses as a number; blanks and garbage default to 0.
pub fn clean_number(cell: &Data) -> f64 {
    match cell {
        Data::Float(v) => *v,
        Data::Int(v) => *v as f64,
        Data::Empty => 0.0,
        Data::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_date_dmy_slash() {
        assert_eq!(
            cell_to_iso_date(&Data::String("05/01/2024".into())),
            Some("2024-01-05".to_string())
        );
    }

    #[test]
    fn text_date_dmy_dash_two_digit_year() {
        assert_eq!(
            cell_to_iso_date(&Data::String("5-1-24".into())),
            Some("2024-01-05".to_string())
        );
    }

    #[test]
    fn serial_date_standard_epoch() {
        assert_eq!(
            cell_to_iso_date(&Data::Float(45000.0)),
            Some("2023-03-15".to_string())
        );
        assert_eq!(
            cell_to_iso_date(&Data::Int(45000)),
            Some("2023-03-15".to_string())
        );
    }

    #[test]
    fn unparseable_date_passes_through_trimmed() {
        // Legacy lenient behavior: keep the raw text rather than reject.
        assert_eq!(
            cell_to_iso_date(&Data::String("  not a date ".into())),
            Some("not a date".to_string())
        );
    }

    #[test]
    fn impossible_calendar_date_passes_through() {
        assert_eq!(
            cell_to_iso_date(&Data::String("32/13/2024".into())),
            Some("32/13/2024".to_string())
        );
    }

    #[test]
    fn empty_date_cell_is_none() {
        assert_eq!(cell_to_iso_date(&Data::Empty), None);
        assert_eq!(cell_to_iso_date(&Data::String("   ".into())), None);
    }

    #[test]
    fn numeric_cleaning_rules() {
        assert_eq!(clean_number(&Data::String("₹12,345 ".into())), 12345.0);
        assert_eq!(clean_number(&Data::String("".into())), 0.0);
        assert_eq!(clean_number(&Data::String("abc".into())), 0.0);
        assert_eq!(clean_number(&Data::Float(150.75)), 150.75);
        assert_eq!(clean_number(&Data::Int(99)), 99.0);
        assert_eq!(clean_number(&Data::Empty), 0.0);
        assert_eq!(clean_number(&Data::String("1,23,456".into())), 123456.0);
        assert_eq!(clean_number(&Data::String("-250".into())), -250.0);
    }
}
