use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{parse_timestamp, EventStatus};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn window_bounds_are_inclusive() {
    let start = parse_timestamp("2026-06-15T10:00");
    let end = parse_timestamp("2026-06-15T11:00");

    assert_eq!(
        EventStatus::derive(at(2026, 6, 15, 9, 59), start, end),
        EventStatus::Upcoming
    );
    assert_eq!(
        EventStatus::derive(at(2026, 6, 15, 10, 0), start, end),
        EventStatus::Live
    );
    assert_eq!(
        EventStatus::derive(at(2026, 6, 15, 11, 0), start, end),
        EventStatus::Live
    );
    assert_eq!(
        EventStatus::derive(at(2026, 6, 15, 11, 1), start, end),
        EventStatus::Completed
    );
}

#[test]
fn both_timestamp_forms_parse() {
    assert!(parse_timestamp("2026-06-15T10:00:00Z").is_some());
    assert!(parse_timestamp("2026-06-15T10:00").is_some());
    assert!(parse_timestamp("not a time").is_none());
}

#[test]
fn api_base_normalization_is_stable() {
    // The shared base always ends in /api regardless of how the override
    // was written.
    assert!(api_client::api_base().ends_with("/api"));
}
