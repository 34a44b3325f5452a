//! Class-scoped collections: assignments, attendance, lesson notes,
//! progress entries, and announcements.

use shared_types::{
    Announcement, AnnouncementCreate, Assignment, AssignmentCreate, AttendanceSheet,
    AttendanceSubmit, LessonNote, NoteCreate, ProgressCreate, ProgressEntry,
};

use crate::http;
use crate::ApiResult;

pub async fn list_assignments(class_id: &str) -> ApiResult<Vec<Assignment>> {
    http::get_json(&format!("/classes/{class_id}/assignments")).await
}

pub async fn create_assignment(class_id: &str, req: &AssignmentCreate) -> ApiResult<Assignment> {
    http::post_json(&format!("/classes/{class_id}/assignments"), req).await
}

pub async fn delete_assignment(class_id: &str, assignment_id: &str) -> ApiResult<()> {
    http::delete(&format!("/classes/{class_id}/assignments/{assignment_id}")).await
}

pub async fn list_attendance(class_id: &str) -> ApiResult<Vec<AttendanceSheet>> {
    http::get_json(&format!("/classes/{class_id}/attendance")).await
}

/// One batch submit per session date; the sheet covers the whole roster.
pub async fn submit_attendance(
    class_id: &str,
    req: &AttendanceSubmit,
) -> ApiResult<AttendanceSheet> {
    http::post_json(&format!("/classes/{class_id}/attendance"), req).await
}

pub async fn list_notes(class_id: &str) -> ApiResult<Vec<LessonNote>> {
    http::get_json(&format!("/classes/{class_id}/notes")).await
}

pub async fn create_note(class_id: &str, req: &NoteCreate) -> ApiResult<LessonNote> {
    http::post_json(&format!("/classes/{class_id}/notes"), req).await
}

pub async fn delete_note(class_id: &str, note_id: &str) -> ApiResult<()> {
    http::delete(&format!("/classes/{class_id}/notes/{note_id}")).await
}

pub async fn list_progress(class_id: &str) -> ApiResult<Vec<ProgressEntry>> {
    http::get_json(&format!("/classes/{class_id}/progress")).await
}

pub async fn create_progress(class_id: &str, req: &ProgressCreate) -> ApiResult<ProgressEntry> {
    http::post_json(&format!("/classes/{class_id}/progress"), req).await
}

pub async fn list_announcements(class_id: &str) -> ApiResult<Vec<Announcement>> {
    http::get_json(&format!("/classes/{class_id}/announcements")).await
}

pub async fn create_announcement(
    class_id: &str,
    req: &AnnouncementCreate,
) -> ApiResult<Announcement> {
    http::post_json(&format!("/classes/{class_id}/announcements"), req).await
}
