use crate::response::{error_response, no_content};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::subject::SubjectService;
use util::state::AppState;

/// DELETE /api/subjects/{id}
///
/// - `204 No Content`
/// - `404 Not Found` - Unknown subject
/// - `409 Conflict` - The subject is still scheduled in a class
pub async fn delete_subject(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match SubjectService::delete(app_state.db(), id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
