use crate::response::{error_response, no_content};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::student::{StudentInput, StudentService};
use util::state::AppState;

/// PUT /api/students/{id}
///
/// - `204 No Content`
/// - `400 Bad Request` - Blank names or unknown `group_id`
/// - `404 Not Found` - Unknown student
pub async fn update_student(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<StudentInput>,
) -> impl IntoResponse {
    match StudentService::update(app_state.db(), id, req).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
