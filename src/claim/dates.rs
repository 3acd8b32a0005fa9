//! Calendar helpers converting dates to elapsed development time

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whole calendar months from `from` to `to`, floored at zero
///
/// Day of month is ignored: 2025-06-30 -> 2025-07-01 counts as one month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let months = (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    months.max(0) as u32
}

/// Completed development years for an elapsed month count
pub fn development_years(months: u32) -> u32 {
    months / 12
}

pub fn months_to_years(months: u32) -> f64 {
    months as f64 / 12.0
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| Error::InvalidDate {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(date(2025, 6, 15), date(2026, 10, 19)), 16);
        assert_eq!(months_between(date(2025, 6, 30), date(2025, 7, 1)), 1);
        assert_eq!(months_between(date(2025, 6, 1), date(2025, 6, 30)), 0);
    }

    #[test]
    fn test_months_between_floors_at_zero() {
        assert_eq!(months_between(date(2027, 1, 1), date(2026, 1, 1)), 0);
    }

    #[test]
    fn test_development_years() {
        assert_eq!(development_years(0), 0);
        assert_eq!(development_years(11), 0);
        assert_eq!(development_years(12), 1);
        assert_eq!(development_years(35), 2);
    }

    #[test]
    fn test_months_to_years() {
        assert!((months_to_years(18) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-06-15").unwrap(), date(2025, 6, 15));
        assert_eq!(parse_date(" 2027-12-31 ").unwrap(), date(2027, 12, 31));

        let err = parse_date("15/06/2025").unwrap_err();
        assert!(matches!(err, Error::InvalidDate { .. }));
    }
}
