use chrono::NaiveDate;

use crate::constants::ISO_DATE_FORMAT;

/// Parses a ledger date cell leniently.
///
/// Ledger dates are ISO `YYYY-MM-DD` strings, but the source format enforces
/// nothing. An unparseable cell yields `None` so it simply drops out of
/// date-driven selection instead of failing a load.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2025-06-27"),
            NaiveDate::from_ymd_opt(2025, 6, 27)
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_iso_date(" 2025-07-01 "),
            NaiveDate::from_ymd_opt(2025, 7, 1)
        );
    }

    #[test]
    fn test_garbage_yields_none() {
        assert_eq!(parse_iso_date("not a date"), None);
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("07/01/2025"), None);
    }
}
