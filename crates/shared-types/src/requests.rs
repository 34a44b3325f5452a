//! Request payloads for the mutating REST endpoints.

use serde::{Deserialize, Serialize};

use crate::attendance::AttendanceEntry;
use crate::user::UserRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub max_students: u32,
}

impl Default for ClassCreate {
    fn default() -> Self {
        ClassCreate {
            title: String::new(),
            description: None,
            start_time: String::new(),
            end_time: String::new(),
            max_students: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentCreate {
    pub class_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoCreate {
    pub class_id: String,
    pub title: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// PATCH /users/{id}. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCreate {
    pub student_id: String,
    pub amount: f64,
    pub description: String,
    pub due_date: String,
}

/// POST /students/{id}/credits. `amount` is a signed number; negative
/// values debit the balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditAdjust {
    pub amount: f64,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSubmit {
    pub session_date: String,
    pub records: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteCreate {
    pub session_date: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressCreate {
    pub student_id: String,
    pub grade: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementCreate {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEventCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub meeting_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn credit_adjust_serializes_amount_as_signed_number() {
        // A refund like {amount: -100, note: "refund"} must post amount
        // as a number, not a string.
        let payload = CreditAdjust { amount: -100.0, note: "refund".into() };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["amount"].is_number());
        assert_eq!(value["amount"].as_f64(), Some(-100.0));
        assert_eq!(value["note"], "refund");
    }

    #[test]
    fn enrollment_payload_carries_only_class_id() {
        let payload = EnrollmentCreate { class_id: "class_1".into() };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({ "class_id": "class_1" }));
    }

    #[test]
    fn user_update_omits_unset_fields() {
        let patch = UserUpdate { role: Some(UserRole::Teacher), meet_link: None };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "role": "teacher" }));
    }

    #[test]
    fn class_create_defaults_to_thirty_seats() {
        assert_eq!(ClassCreate::default().max_students, 30);
    }

    #[test]
    fn announcement_payload_carries_title_and_content() {
        let payload = AnnouncementCreate {
            title: "Recital".into(),
            content: "Doors open at six.".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "title": "Recital", "content": "Doors open at six." })
        );
    }
}
