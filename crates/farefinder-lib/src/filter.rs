//! Search-filter construction and the date-range defaulting policy.
//!
//! All defaulting lives in pure functions so the policy is testable in
//! isolation: a partially specified range is always completed to a
//! concrete `(from, to)` pair before any request is issued.

use chrono::{Days, NaiveDate};

use crate::error::{Error, Result};

/// Input and query-string date format.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A fully resolved inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Fully resolved search parameters, ready to be mapped onto the
/// flight-search query string.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub return_range: Option<DateRange>,
    pub direct: bool,
    pub max_price: Option<u32>,
    pub limit: u32,
}

impl SearchFilter {
    /// Map the filter onto flight-search query parameters for the given
    /// resolved city codes. Optional parameters are omitted when unset.
    pub fn query_params(&self, origin_code: &str, destination_code: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("flyFrom".to_string(), origin_code.to_string()),
            ("to".to_string(), destination_code.to_string()),
            (
                "dateFrom".to_string(),
                self.date_from.format(DATE_FORMAT).to_string(),
            ),
            (
                "date_to".to_string(),
                self.date_to.format(DATE_FORMAT).to_string(),
            ),
            ("partner".to_string(), "picky".to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if self.direct {
            params.push(("direct_flights".to_string(), "1".to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("max_price".to_string(), max_price.to_string()));
        }
        if let Some(range) = self.return_range {
            params.push((
                "return_from".to_string(),
                range.from.format(DATE_FORMAT).to_string(),
            ));
            params.push((
                "return_to".to_string(),
                range.to.format(DATE_FORMAT).to_string(),
            ));
        }
        params
    }
}

/// Complete a partially specified departure range.
///
/// Both bounds given: used as-is. Only a start: end defaults to start
/// plus one day. Only an end: start defaults to end minus seven days.
/// Neither: `[today, today + 1 day]`.
pub fn resolve_departure_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> DateRange {
    match (from, to) {
        (Some(from), Some(to)) => DateRange { from, to },
        (Some(from), None) => DateRange {
            from,
            to: from + Days::new(1),
        },
        (None, Some(to)) => DateRange {
            from: to - Days::new(7),
            to,
        },
        (None, None) => DateRange {
            from: today,
            to: today + Days::new(1),
        },
    }
}

/// Complete a partially specified return range, or `None` when no
/// return bound was given at all. Dependent defaulting matches
/// [`resolve_departure_range`].
pub fn resolve_return_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<DateRange> {
    match (from, to) {
        (Some(from), Some(to)) => Some(DateRange { from, to }),
        (Some(from), None) => Some(DateRange {
            from,
            to: from + Days::new(1),
        }),
        (None, Some(to)) => Some(DateRange {
            from: to - Days::new(7),
            to,
        }),
        (None, None) => None,
    }
}

/// Parse a `dd/mm/yyyy` date string.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Parse a yes/no answer into a boolean.
pub fn parse_bool(input: &str) -> Result<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(Error::InvalidBool {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_accepts_day_month_year() {
        assert_eq!(parse_date("05/03/2026").unwrap(), date(2026, 3, 5));
        assert_eq!(parse_date(" 31/12/2026 ").unwrap(), date(2026, 12, 31));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(matches!(
            parse_date("2026-03-05"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for yes in ["y", "Y", "yes", "TRUE", "t", "1"] {
            assert!(parse_bool(yes).unwrap(), "{yes} should parse as true");
        }
        for no in ["n", "No", "false", "F", "0"] {
            assert!(!parse_bool(no).unwrap(), "{no} should parse as false");
        }
    }

    #[test]
    fn parse_bool_rejects_garbage() {
        assert!(matches!(
            parse_bool("maybe"),
            Err(Error::InvalidBool { .. })
        ));
    }
}
