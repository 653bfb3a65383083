use crate::response::{error_response, no_content};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::subject::{SubjectInput, SubjectService};
use util::state::AppState;

/// PUT /api/subjects/{id}
pub async fn update_subject(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<SubjectInput>,
) -> impl IntoResponse {
    match SubjectService::update(app_state.db(), id, req).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
