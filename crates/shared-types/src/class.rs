use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::parse_timestamp;
use crate::enrollment::Enrollment;

/// Overview tabs show at most this many upcoming classes.
pub const UPCOMING_LIMIT: usize = 3;

/// A scheduled class, as returned by `GET /classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub class_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub teacher_id: String,
    pub teacher_name: String,
    pub start_time: String,
    pub end_time: String,
    pub max_students: u32,
    pub enrolled_count: u32,
    #[serde(default)]
    pub meet_link: Option<String>,
}

impl Class {
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.start_time)
    }

    /// True when the class starts strictly after `now`. Unparseable
    /// timestamps are never upcoming.
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        self.starts_at().map(|t| t > now).unwrap_or(false)
    }

    /// "3/10 enrolled" capacity string shown on class cards.
    pub fn capacity_label(&self) -> String {
        format!("{}/{} enrolled", self.enrolled_count, self.max_students)
    }
}

/// Classes starting strictly after `now`, sorted ascending by start time,
/// truncated to the first [`UPCOMING_LIMIT`].
pub fn upcoming_classes(classes: &[Class], now: DateTime<Utc>) -> Vec<Class> {
    let mut upcoming: Vec<Class> = classes
        .iter()
        .filter(|c| c.starts_after(now))
        .cloned()
        .collect();
    upcoming.sort_by_key(|c| c.starts_at());
    upcoming.truncate(UPCOMING_LIMIT);
    upcoming
}

/// The subset of `classes` the student is enrolled in, in input order.
pub fn enrolled_classes(classes: &[Class], enrollments: &[Enrollment]) -> Vec<Class> {
    classes
        .iter()
        .filter(|c| enrollments.iter().any(|e| e.class_id == c.class_id))
        .cloned()
        .collect()
}

/// Classes the student may still enroll in: everything not already enrolled.
pub fn available_classes(classes: &[Class], enrolled: &[Class]) -> Vec<Class> {
    classes
        .iter()
        .filter(|c| !enrolled.iter().any(|e| e.class_id == c.class_id))
        .cloned()
        .collect()
}

/// Total enrolled students across a teacher's classes.
pub fn total_enrolled(classes: &[Class]) -> u32 {
    classes.iter().map(|c| c.enrolled_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn class(id: &str, start: &str) -> Class {
        Class {
            class_id: id.into(),
            title: format!("Class {id}"),
            description: None,
            teacher_id: "t1".into(),
            teacher_name: "Ms. Rivera".into(),
            start_time: start.into(),
            end_time: start.into(),
            max_students: 10,
            enrolled_count: 3,
            meet_link: None,
        }
    }

    fn now() -> DateTime<Utc> {
        parse_timestamp("2025-01-01T00:00").unwrap()
    }

    #[test]
    fn upcoming_is_strictly_after_now_sorted_ascending() {
        let classes = vec![
            class("c", "2025-01-03T10:00"),
            class("a", "2025-01-01T00:00"), // exactly now, excluded
            class("b", "2025-01-02T10:00"),
            class("d", "2024-12-31T10:00"), // past
        ];
        let up = upcoming_classes(&classes, now());
        let ids: Vec<&str> = up.iter().map(|c| c.class_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn upcoming_truncates_to_three() {
        let classes: Vec<Class> = (1..=5)
            .map(|d| class(&format!("c{d}"), &format!("2025-01-0{d}T10:00")))
            .collect();
        assert_eq!(upcoming_classes(&classes, now()).len(), UPCOMING_LIMIT);
    }

    #[test]
    fn unparseable_start_time_is_not_upcoming() {
        let classes = vec![class("x", "soon")];
        assert!(upcoming_classes(&classes, now()).is_empty());
    }

    #[test]
    fn available_excludes_enrolled_ids() {
        let all = vec![class("1", "2025-01-01T10:00"), class("2", "2025-01-02T10:00")];
        let enrollments = vec![Enrollment { class_id: "2".into(), student_id: None }];
        let enrolled = enrolled_classes(&all, &enrollments);
        let available = available_classes(&all, &enrolled);
        assert_eq!(enrolled.len(), 1);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].class_id, "1");
    }

    #[test]
    fn unenrolled_student_sees_class_with_capacity_label() {
        // Spec scenario: class 1 with 3/10 enrolled and no enrollments.
        let all = vec![class("1", "2025-01-01T10:00")];
        let enrolled = enrolled_classes(&all, &[]);
        let available = available_classes(&all, &enrolled);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].capacity_label(), "3/10 enrolled");
    }

    #[test]
    fn total_enrolled_sums_counts() {
        let classes = vec![class("1", "x"), class("2", "y")];
        assert_eq!(total_enrolled(&classes), 6);
    }
}
