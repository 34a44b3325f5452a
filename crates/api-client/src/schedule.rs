use shared_types::{ScheduleEvent, ScheduleEventCreate};

use crate::http;
use crate::ApiResult;

/// Flat list of calendar events, all roles.
pub async fn list() -> ApiResult<Vec<ScheduleEvent>> {
    http::get_json("/schedule").await
}

pub async fn create(req: &ScheduleEventCreate) -> ApiResult<ScheduleEvent> {
    http::post_json("/schedule", req).await
}
