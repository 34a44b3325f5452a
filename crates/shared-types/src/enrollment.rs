use serde::{Deserialize, Serialize};

/// A student's enrollment in a class. The backend omits `student_id` when
/// listing the caller's own enrollments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub class_id: String,
    #[serde(default)]
    pub student_id: Option<String>,
}
