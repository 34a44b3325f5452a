use serde::{Deserialize, Serialize};

/// A homework assignment scoped to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub assignment_id: String,
    pub class_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: String,
}
