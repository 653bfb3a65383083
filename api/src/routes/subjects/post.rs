use crate::response::{created, error_response};
use axum::{Json, extract::State, response::IntoResponse};
use services::subject::{SubjectInput, SubjectService};
use util::state::AppState;

/// POST /api/subjects
///
/// ### Request Body
/// ```json
/// { "name": "Operating Systems" }
/// ```
///
/// - `201 Created`
/// - `400 Bad Request` - Name shorter than 3 or longer than 100 characters
pub async fn create_subject(
    State(app_state): State<AppState>,
    Json(req): Json<SubjectInput>,
) -> impl IntoResponse {
    match SubjectService::create(app_state.db(), req).await {
        Ok(subject) => created(subject, "Subject created successfully"),
        Err(e) => error_response(e),
    }
}
