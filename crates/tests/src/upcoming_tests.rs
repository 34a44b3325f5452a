use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{upcoming_classes, UPCOMING_LIMIT};

use crate::common::class;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn strictly_after_now_only() {
    let classes = vec![
        class("past", "2026-06-15T11:59", 10, 0),
        class("exact", "2026-06-15T12:00", 10, 0),
        class("future", "2026-06-15T12:01", 10, 0),
    ];
    let upcoming = upcoming_classes(&classes, now());
    let ids: Vec<_> = upcoming.iter().map(|c| c.class_id.as_str()).collect();
    assert_eq!(ids, vec!["future"]);
}

#[test]
fn sorted_ascending_and_truncated_to_three() {
    let classes = vec![
        class("d", "2026-06-19T10:00", 10, 0),
        class("b", "2026-06-17T10:00", 10, 0),
        class("a", "2026-06-16T10:00", 10, 0),
        class("c", "2026-06-18T10:00", 10, 0),
    ];
    let upcoming = upcoming_classes(&classes, now());
    assert_eq!(upcoming.len(), UPCOMING_LIMIT);
    let ids: Vec<_> = upcoming.iter().map(|c| c.class_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn unparseable_start_times_are_never_upcoming() {
    let classes = vec![
        class("bad", "sometime", 10, 0),
        class("good", "2026-06-16T10:00", 10, 0),
    ];
    let upcoming = upcoming_classes(&classes, now());
    let ids: Vec<_> = upcoming.iter().map(|c| c.class_id.as_str()).collect();
    assert_eq!(ids, vec!["good"]);
}
