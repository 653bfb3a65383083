use crate::response::{error_response, no_content};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::student::StudentService;
use util::state::AppState;

/// DELETE /api/students/{id}
///
/// Delete a student. Their ratings and teacher assignments go with them.
///
/// - `204 No Content`
/// - `404 Not Found` - Unknown student
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match StudentService::delete(app_state.db(), id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
