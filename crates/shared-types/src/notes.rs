use serde::{Deserialize, Serialize};

/// A teacher's note for one class session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonNote {
    pub note_id: String,
    pub class_id: String,
    pub session_date: String,
    pub content: String,
}
