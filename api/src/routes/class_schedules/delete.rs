use crate::response::{error_response, no_content};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::class_schedule::ClassScheduleService;
use util::state::AppState;

/// DELETE /api/class-schedules/{id}
pub async fn delete_class_schedule(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match ClassScheduleService::delete(app_state.db(), id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
