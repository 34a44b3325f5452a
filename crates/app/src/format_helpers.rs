//! Shared formatting utilities for the UI layer.
//!
//! Timestamp inputs are the raw strings the backend returns; parsing goes
//! through `shared_types::parse_timestamp` so every page tolerates the same
//! set of formats.

use chrono::{Datelike, Timelike};
use shared_types::parse_timestamp;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a raw timestamp as "Jan 20, 2026" (date-only, human-readable).
///
/// Falls back to the raw string if parsing fails.
pub fn format_date_human(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{} {}, {}",
            MONTH_NAMES[dt.month0() as usize],
            dt.day(),
            dt.year()
        ),
        None => raw.to_string(),
    }
}

/// Format a raw timestamp as "Jan 20, 2026 9:35 PM" (with 12-hour time).
pub fn format_datetime_human(raw: &str) -> String {
    let dt = match parse_timestamp(raw) {
        Some(dt) => dt,
        None => return raw.to_string(),
    };

    let hour = dt.hour();
    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!(
        "{} {}, {} {}:{:02} {}",
        MONTH_NAMES[dt.month0() as usize],
        dt.day(),
        dt.year(),
        display_hour,
        dt.minute(),
        ampm
    )
}

/// Format a time of day as "9:35 PM", dropping the date entirely.
pub fn format_time_human(raw: &str) -> String {
    let dt = match parse_timestamp(raw) {
        Some(dt) => dt,
        None => return raw.to_string(),
    };

    let hour = dt.hour();
    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{}:{:02} {}", display_hour, dt.minute(), ampm)
}

/// Format a currency amount with two decimal places, e.g. "$149.99".
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn date_human() {
        assert_eq!(format_date_human("2026-01-20T21:35:00Z"), "Jan 20, 2026");
    }

    #[test]
    fn datetime_human_pm() {
        assert_eq!(
            format_datetime_human("2026-01-20T21:35:00Z"),
            "Jan 20, 2026 9:35 PM"
        );
    }

    #[test]
    fn datetime_human_midnight_is_twelve_am() {
        assert_eq!(
            format_datetime_human("2026-01-20T00:05:00Z"),
            "Jan 20, 2026 12:05 AM"
        );
    }

    #[test]
    fn datetime_local_form_without_seconds() {
        assert_eq!(
            format_datetime_human("2026-03-02T09:00"),
            "Mar 2, 2026 9:00 AM"
        );
    }

    #[test]
    fn unparseable_falls_back_to_raw() {
        assert_eq!(format_date_human("soon"), "soon");
    }

    #[test]
    fn money_two_decimals() {
        assert_eq!(format_money(149.99), "$149.99");
        assert_eq!(format_money(100.0), "$100.00");
    }
}
