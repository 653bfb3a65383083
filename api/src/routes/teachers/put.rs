use crate::response::{error_response, no_content};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::teacher::{TeacherInput, TeacherService};
use util::state::AppState;

/// PUT /api/teachers/{id}
///
/// Replace a teacher's names. Admin only.
///
/// - `204 No Content`
/// - `400 Bad Request` - Blank or overlong name
/// - `404 Not Found` - Unknown teacher
pub async fn update_teacher(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TeacherInput>,
) -> impl IntoResponse {
    match TeacherService::update(app_state.db(), id, req).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
