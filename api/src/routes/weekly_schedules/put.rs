use crate::response::{error_response, no_content};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::weekly_schedule::{WeeklyScheduleService, WeeklyScheduleUpdate};
use util::state::AppState;

/// PUT /api/weekly-schedules/{id}
///
/// Updates group and week. When `classes` is present the schedule's classes
/// are replaced with it; otherwise the existing classes follow the new group.
///
/// - `204 No Content`
/// - `400 Bad Request` - Invalid fields or an overloaded day
/// - `404 Not Found` - Unknown schedule
/// - `409 Conflict` - Another schedule already covers that group and week
pub async fn update_weekly_schedule(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<WeeklyScheduleUpdate>,
) -> impl IntoResponse {
    match WeeklyScheduleService::update(app_state.db(), id, req).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
