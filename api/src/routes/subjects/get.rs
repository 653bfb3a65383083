use crate::response::{error_response, ok};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::subject::SubjectService;
use util::state::AppState;

/// GET /api/subjects
///
/// All subjects ordered by name.
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [ { "id": 1, "name": "Databases" } ],
///   "message": "Subjects retrieved successfully"
/// }
/// ```
pub async fn list_subjects(State(app_state): State<AppState>) -> impl IntoResponse {
    match SubjectService::list(app_state.db()).await {
        Ok(subjects) => ok(subjects, "Subjects retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/subjects/{id}
pub async fn get_subject(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match SubjectService::get(app_state.db(), id).await {
        Ok(subject) => ok(subject, "Subject retrieved successfully"),
        Err(e) => error_response(e),
    }
}
