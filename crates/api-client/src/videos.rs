use shared_types::{Video, VideoCreate};

use crate::http;
use crate::ApiResult;

pub async fn list() -> ApiResult<Vec<Video>> {
    http::get_json("/videos").await
}

pub async fn create(req: &VideoCreate) -> ApiResult<Video> {
    http::post_json("/videos", req).await
}
