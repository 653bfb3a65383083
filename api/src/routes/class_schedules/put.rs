use crate::response::{error_response, no_content};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::class_schedule::{ClassScheduleInput, ClassScheduleService};
use util::state::AppState;

/// PUT /api/class-schedules/{id}
pub async fn update_class_schedule(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ClassScheduleInput>,
) -> impl IntoResponse {
    match ClassScheduleService::update(app_state.db(), id, req).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
