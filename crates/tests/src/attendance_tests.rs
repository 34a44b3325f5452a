use std::collections::HashMap;

use pretty_assertions::assert_eq;
use shared_types::{finalize_roster, AttendanceStatus, AttendanceSubmit};

#[test]
fn unmarked_students_are_submitted_as_present() {
    let roster = vec!["s1".to_string(), "s2".to_string(), "s3".to_string()];
    let mut marks = HashMap::new();
    marks.insert("s2".to_string(), AttendanceStatus::Absent);

    let records = finalize_roster(&roster, &marks);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].status, AttendanceStatus::Present);
    assert_eq!(records[1].status, AttendanceStatus::Absent);
    assert_eq!(records[2].status, AttendanceStatus::Present);
}

#[test]
fn roster_order_is_preserved() {
    let roster = vec!["b".to_string(), "a".to_string()];
    let records = finalize_roster(&roster, &HashMap::new());
    let ids: Vec<_> = records.iter().map(|r| r.student_id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn submit_payload_carries_lowercase_statuses() {
    let roster = vec!["s1".to_string()];
    let mut marks = HashMap::new();
    marks.insert("s1".to_string(), AttendanceStatus::Late);

    let req = AttendanceSubmit {
        session_date: "2026-06-15".to_string(),
        records: finalize_roster(&roster, &marks),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["session_date"], "2026-06-15");
    assert_eq!(value["records"][0]["status"], "late");
}
