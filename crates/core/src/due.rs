//! Due-date and elapsed-time presentation rules.
//!
//! Both functions take `now` explicitly so callers (and tests) control the
//! clock; nothing in this module reads the system time.

use serde::Serialize;

use crate::types::Timestamp;

const SECS_PER_DAY: i64 = 86_400;

/// Relative due-date text plus an overdue flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueDays {
    pub text: String,
    pub is_overdue: bool,
}

/// Render a due timestamp relative to `now`.
///
/// The day difference is the ceiling of the time difference in days, so a
/// deadline 1 second away is already "Due tomorrow"-adjacent arithmetic:
/// 0 days -> "Due today", 1 -> "Due tomorrow", -1 -> "1 day overdue",
/// otherwise "Due in N days" / "N days overdue". `None` in, `None` out.
pub fn due_days(now: Timestamp, due_at: Option<Timestamp>) -> Option<DueDays> {
    let due_at = due_at?;
    let secs = (due_at - now).num_seconds();
    // Ceiling division that holds for negative differences too.
    let days = (secs + SECS_PER_DAY - 1).div_euclid(SECS_PER_DAY);

    let is_overdue = days < 0;
    let text = match days {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        -1 => "1 day overdue".to_string(),
        d if d < 0 => format!("{} days overdue", -d),
        d => format!("Due in {d} days"),
    };

    Some(DueDays { text, is_overdue })
}

/// Render how long ago a past timestamp was: "Today", "1 day ago",
/// "N days ago". Future timestamps have no "since" representation and
/// return `None`.
pub fn days_since(now: Timestamp, then: Option<Timestamp>) -> Option<String> {
    let then = then?;
    let days = (now - then).num_seconds().div_euclid(SECS_PER_DAY);
    match days {
        0 => Some("Today".to_string()),
        1 => Some("1 day ago".to_string()),
        d if d > 1 => Some(format!("{d} days ago")),
        _ => None,
    }
}

/// Uppercase the first character and lowercase the rest, for status and
/// priority labels.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn absent_due_date_yields_nothing() {
        assert_eq!(due_days(now(), None), None);
    }

    #[test]
    fn exactly_24h_ahead_is_due_tomorrow() {
        let result = due_days(now(), Some(now() + Duration::hours(24))).unwrap();
        assert_eq!(result.text, "Due tomorrow");
        assert!(!result.is_overdue);
    }

    #[test]
    fn exactly_24h_behind_is_one_day_overdue() {
        let result = due_days(now(), Some(now() - Duration::hours(24))).unwrap();
        assert_eq!(result.text, "1 day overdue");
        assert!(result.is_overdue);
    }

    #[test]
    fn same_instant_is_due_today() {
        let result = due_days(now(), Some(now())).unwrap();
        assert_eq!(result.text, "Due today");
        assert!(!result.is_overdue);
    }

    #[test]
    fn a_few_hours_ago_is_due_today() {
        // -3h ceils to 0 days.
        let result = due_days(now(), Some(now() - Duration::hours(3))).unwrap();
        assert_eq!(result.text, "Due today");
        assert!(!result.is_overdue);
    }

    #[test]
    fn multi_day_future_and_past() {
        let ahead = due_days(now(), Some(now() + Duration::days(5))).unwrap();
        assert_eq!(ahead.text, "Due in 5 days");
        assert!(!ahead.is_overdue);

        let behind = due_days(now(), Some(now() - Duration::days(3))).unwrap();
        assert_eq!(behind.text, "3 days overdue");
        assert!(behind.is_overdue);
    }

    #[test]
    fn one_second_ahead_rounds_up_to_tomorrow_boundary() {
        // Ceiling: any positive fraction of a day counts as the next day.
        let result = due_days(now(), Some(now() + Duration::seconds(1))).unwrap();
        assert_eq!(result.text, "Due tomorrow");
    }

    #[test]
    fn days_since_today_and_past() {
        assert_eq!(days_since(now(), Some(now())).unwrap(), "Today");
        assert_eq!(
            days_since(now(), Some(now() - Duration::days(1))).unwrap(),
            "1 day ago"
        );
        assert_eq!(
            days_since(now(), Some(now() - Duration::days(14))).unwrap(),
            "14 days ago"
        );
    }

    #[test]
    fn days_since_future_yields_nothing() {
        assert_eq!(days_since(now(), Some(now() + Duration::days(2))), None);
        assert_eq!(days_since(now(), None), None);
    }

    #[test]
    fn capitalize_first_normalizes_labels() {
        assert_eq!(capitalize_first("pending"), "Pending");
        assert_eq!(capitalize_first("HIGH"), "High");
        assert_eq!(capitalize_first(""), "");
    }
}
