//! Time helpers - business timezone conversions
//!
//! Handlers validate and convert dates here; repositories only see ISO
//! `YYYY-MM-DD` strings and unix millis.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Validate date is not in the future (business timezone)
pub fn validate_not_future(date: NaiveDate, tz: Tz) -> AppResult<()> {
    let today = chrono::Utc::now().with_timezone(&tz).date_naive();
    if date > today {
        return Err(AppError::validation(format!(
            "Date {} is in the future (today is {})",
            date, today
        )));
    }
    Ok(())
}

/// Current unix time in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current wall-clock time in the business timezone, formatted HH:MM
///
/// Used as the auto-captured attendance check-in time.
pub fn local_hhmm(tz: Tz) -> String {
    chrono::Utc::now()
        .with_timezone(&tz)
        .format("%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert!(parse_date("2024-01-05").is_ok());
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn rejects_future_dates() {
        let tz = chrono_tz::Asia::Kolkata;
        let tomorrow = chrono::Utc::now().with_timezone(&tz).date_naive() + chrono::Days::new(1);
        assert!(validate_not_future(tomorrow, tz).is_err());
    }
}
