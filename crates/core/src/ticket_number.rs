//! Ticket number generation.
//!
//! Ticket numbers encode the creation date and a same-day sequence:
//! `OIT_YYYYMMDD_NNN`, where `NNN` is (tickets already created that day) + 1,
//! zero-padded to three digits. Candidate generation is a pure read; two
//! requests racing on the same count produce the same candidate, and the
//! unique constraint on `ticket.ticket_number` rejects the loser at insert.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Prefix carried by every ticket number.
pub const TICKET_NUMBER_PREFIX: &str = "OIT";

/// Compact `YYYYMMDD` key for a calendar date, as used in ticket numbers and
/// the `/tickets/count?date=` query parameter.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Parse a `YYYYMMDD` date key.
pub fn parse_date_key(key: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(key, "%Y%m%d")
        .map_err(|_| CoreError::Validation(format!("Invalid date '{key}', expected YYYYMMDD")))
}

/// Compute the candidate ticket number for a date, given how many tickets
/// were already created on that date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use orca_core::ticket_number::candidate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
/// assert_eq!(candidate(date, 0), "OIT_20250307_001");
/// assert_eq!(candidate(date, 41), "OIT_20250307_042");
/// ```
pub fn candidate(date: NaiveDate, existing_count: i64) -> String {
    format!(
        "{TICKET_NUMBER_PREFIX}_{}_{:03}",
        date.format("%Y%m%d"),
        existing_count + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_ticket_of_the_day() {
        assert_eq!(candidate(date(2025, 1, 2), 0), "OIT_20250102_001");
    }

    #[test]
    fn sequence_is_count_plus_one() {
        assert_eq!(candidate(date(2025, 6, 30), 7), "OIT_20250630_008");
    }

    #[test]
    fn same_count_yields_same_candidate() {
        // Idempotent read: no intervening creation, no drift.
        let a = candidate(date(2025, 6, 30), 3);
        let b = candidate(date(2025, 6, 30), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn insert_advances_candidate_by_one() {
        let before = candidate(date(2025, 6, 30), 3);
        let after = candidate(date(2025, 6, 30), 4);
        assert_eq!(before, "OIT_20250630_004");
        assert_eq!(after, "OIT_20250630_005");
    }

    #[test]
    fn sequence_past_three_digits_widens() {
        assert_eq!(candidate(date(2025, 6, 30), 999), "OIT_20250630_1000");
    }

    #[test]
    fn date_key_round_trips() {
        let d = date(2024, 12, 1);
        assert_eq!(date_key(d), "20241201");
        assert_eq!(parse_date_key("20241201").unwrap(), d);
    }

    #[test]
    fn bad_date_key_is_a_validation_error() {
        assert!(matches!(
            parse_date_key("2024-12-01"),
            Err(CoreError::Validation(_))
        ));
        assert!(parse_date_key("").is_err());
    }
}
