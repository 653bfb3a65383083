use crate::response::{error_response, no_content};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::weekly_schedule::WeeklyScheduleService;
use util::state::AppState;

/// DELETE /api/weekly-schedules/{id}
///
/// Deletes the schedule. Its classes are kept and detached from it.
pub async fn delete_weekly_schedule(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match WeeklyScheduleService::delete(app_state.db(), id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
