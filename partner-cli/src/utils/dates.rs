//! Argument parsers for dates given on the command line.

use chrono::NaiveDate;
use partner_core::month_grid::MonthWindow;

/// Parse YYYY-MM-DD
pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))?;
    displayable(date)
}

/// Parse YYYY-MM as the first day of that month
pub fn parse_month(s: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("Invalid month format '{}'. Expected YYYY-MM", s))?;
    displayable(date)
}

/// Reject dates whose month grid cannot be built.
fn displayable(date: NaiveDate) -> Result<NaiveDate, String> {
    match MonthWindow::checked_for_date(date) {
        Some(_) => Ok(date),
        None => Err(format!("Date {} is outside the supported calendar range", date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day() {
        assert_eq!(parse_day("2025-06-15"), Ok(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
        assert!(parse_day("2025-02-30").is_err());
        assert!(parse_day("15/06/2025").is_err());
    }

    #[test]
    fn parses_month_as_first_day() {
        assert_eq!(parse_month("2025-06"), Ok(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("June").is_err());
    }

    #[test]
    fn rejects_dates_at_the_end_of_the_range() {
        let last = NaiveDate::MAX.format("%Y-%m-%d").to_string();
        assert!(parse_day(&last).is_err());
        assert!(parse_day("9999-12-31").is_ok());
    }
}
