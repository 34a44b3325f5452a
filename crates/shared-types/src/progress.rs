use serde::{Deserialize, Serialize};

/// A graded progress entry for one student in one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub progress_id: String,
    pub class_id: String,
    pub student_id: String,
    pub grade: String,
    #[serde(default)]
    pub comment: String,
}
