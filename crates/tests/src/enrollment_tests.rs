use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{available_classes, enrolled_classes, EnrollmentCreate};

use crate::common::{class, enrollment};

#[test]
fn enrolled_class_ids_are_excluded_from_the_enrollable_set() {
    let all = vec![
        class("1", "2026-06-16T10:00", 10, 3),
        class("2", "2026-06-17T10:00", 10, 5),
        class("3", "2026-06-18T10:00", 10, 0),
    ];
    let enrollments = vec![enrollment("2")];

    let enrolled = enrolled_classes(&all, &enrollments);
    let available = available_classes(&all, &enrolled);

    let enrolled_ids: Vec<_> = enrolled.iter().map(|c| c.class_id.as_str()).collect();
    let available_ids: Vec<_> = available.iter().map(|c| c.class_id.as_str()).collect();
    assert_eq!(enrolled_ids, vec!["2"]);
    assert_eq!(available_ids, vec!["1", "3"]);
}

#[test]
fn fresh_student_sees_open_class_with_capacity_label() {
    let all = vec![class("1", "2025-01-01T10:00", 10, 3)];
    let enrolled = enrolled_classes(&all, &[]);
    let available = available_classes(&all, &enrolled);

    assert!(enrolled.is_empty());
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].class_id, "1");
    assert_eq!(available[0].capacity_label(), "3/10 enrolled");
}

#[test]
fn enroll_request_posts_only_the_class_id() {
    let req = EnrollmentCreate {
        class_id: "1".to_string(),
    };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({"class_id": "1"}));
}
