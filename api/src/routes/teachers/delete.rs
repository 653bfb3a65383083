use crate::response::{error_response, no_content};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::teacher::TeacherService;
use util::state::AppState;

/// DELETE /api/teachers/{id}
///
/// Delete a teacher together with their ratings and group links. Admin only.
///
/// - `204 No Content`
/// - `404 Not Found` - Unknown teacher
pub async fn delete_teacher(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match TeacherService::delete(app_state.db(), id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/teachers/{id}/groups/{group_id}
///
/// - `204 No Content`
/// - `404 Not Found` - Teacher does not teach the group
pub async fn remove_teacher_group(
    State(app_state): State<AppState>,
    Path((id, group_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match TeacherService::remove_group(app_state.db(), id, group_id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
