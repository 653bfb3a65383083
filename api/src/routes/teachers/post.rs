use crate::response::{created, error_response, no_content};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::teacher::{TeacherInput, TeacherService};
use util::state::AppState;

/// POST /api/teachers
///
/// Create a teacher. Admin only.
///
/// ### Request Body
/// ```json
/// {
///   "first_name": "Антон",
///   "last_name": "Тупысев",
///   "middle_name": "Михайлович"
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` - The new teacher in detail form
/// - `400 Bad Request` - Blank or overlong name
/// - `401 Unauthorized` - Missing or invalid JWT
/// - `403 Forbidden` - Not an administrator
pub async fn create_teacher(
    State(app_state): State<AppState>,
    Json(req): Json<TeacherInput>,
) -> impl IntoResponse {
    match TeacherService::create(app_state.db(), req).await {
        Ok(teacher) => created(teacher, "Teacher created successfully"),
        Err(e) => error_response(e),
    }
}

/// POST /api/teachers/{id}/groups/{group_id}
///
/// Link a teacher to a group. Admin only.
///
/// - `204 No Content`
/// - `404 Not Found` - Unknown teacher or group
/// - `409 Conflict` - Already linked
pub async fn add_teacher_group(
    State(app_state): State<AppState>,
    Path((id, group_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match TeacherService::add_group(app_state.db(), id, group_id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
