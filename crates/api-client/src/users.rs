use shared_types::{User, UserUpdate};

use crate::http;
use crate::ApiResult;

/// `GET /users`. Admin only.
pub async fn list() -> ApiResult<Vec<User>> {
    http::get_json("/users").await
}

/// `PATCH /users/{id}` for role changes and teacher meet links.
pub async fn update(user_id: &str, patch: &UserUpdate) -> ApiResult<serde_json::Value> {
    http::patch_json(&format!("/users/{user_id}"), patch).await
}
