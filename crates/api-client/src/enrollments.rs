use shared_types::{Enrollment, EnrollmentCreate};

use crate::http;
use crate::ApiResult;

/// The caller's own enrollments.
pub async fn list() -> ApiResult<Vec<Enrollment>> {
    http::get_json("/enrollments").await
}

pub async fn enroll(class_id: &str) -> ApiResult<serde_json::Value> {
    let req = EnrollmentCreate { class_id: class_id.to_string() };
    http::post_json("/enrollments", &req).await
}
