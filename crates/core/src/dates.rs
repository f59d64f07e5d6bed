//! Calendar date parsing for attendance and payment days.
//!
//! Dates travel as `YYYY-MM-DD` strings. A parse failure is reported as
//! [`InvalidField::Date`], distinct from every other validation failure.

use chrono::NaiveDate;

use crate::error::{CoreError, InvalidField};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Single-digit months or days (`2024-1-5`) are rejected even though chrono
/// itself would accept them.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || {
        CoreError::invalid(
            InvalidField::Date,
            format!("invalid date '{input}', use YYYY-MM-DD"),
        )
    };
    if input.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_iso_date() {
        let date = parse_calendar_date("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn rejects_other_layouts() {
        for input in ["15-03-2024", "2024/03/15", "2024-3-5", "", "2024-03-15T00:00:00Z"] {
            assert_matches!(
                parse_calendar_date(input),
                Err(CoreError::Invalid {
                    field: InvalidField::Date,
                    ..
                }),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_calendar_date("2023-02-29").is_err());
        assert!(parse_calendar_date("2024-13-01").is_err());
    }
}
