use shared_types::{Class, ClassCreate};

use crate::http;
use crate::ApiResult;

pub async fn list() -> ApiResult<Vec<Class>> {
    http::get_json("/classes").await
}

pub async fn create(req: &ClassCreate) -> ApiResult<Class> {
    http::post_json("/classes", req).await
}

pub async fn remove(class_id: &str) -> ApiResult<()> {
    http::delete(&format!("/classes/{class_id}")).await
}

/// `POST /classes/{id}/meet` asks the backend to mint a meeting link.
pub async fn create_meet_link(class_id: &str) -> ApiResult<serde_json::Value> {
    http::post_empty(&format!("/classes/{class_id}/meet")).await
}
