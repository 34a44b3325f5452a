use serde::{Deserialize, Serialize};
use shared_types::{RegisterRequest, User};

use crate::http;
use crate::ApiResult;

/// Response of `POST /auth/login`: the cookie does the real work, but the
/// body also carries the user so the client can seed its session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// `GET /auth/me`, answers who the cookie belongs to.
pub async fn me() -> ApiResult<User> {
    http::get_json("/auth/me").await
}

/// Form-encoded login; the backend expects OAuth2 `username`/`password`.
pub async fn login(email: &str, password: &str) -> ApiResult<LoginResponse> {
    http::post_form("/auth/login", &[("username", email), ("password", password)]).await
}

pub async fn register(req: &RegisterRequest) -> ApiResult<User> {
    http::post_json("/auth/register", req).await
}

pub async fn logout() -> ApiResult<serde_json::Value> {
    http::post_empty("/auth/logout").await
}

/// `GET /`, the backend liveness ping logged by the landing page.
pub async fn ping() -> ApiResult<serde_json::Value> {
    http::get_json("/").await
}
