use serde::{Deserialize, Serialize};

/// An announcement posted to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub announcement_id: String,
    pub class_id: String,
    pub title: String,
    pub content: String,
    pub posted_by_name: String,
    pub created_at: String,
}
