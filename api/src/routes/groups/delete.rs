use crate::response::{error_response, no_content};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::group::GroupService;
use util::state::AppState;

/// DELETE /api/groups/{id}
///
/// - `204 No Content`
/// - `404 Not Found` - Unknown group
/// - `409 Conflict` - Students still belong to the group
pub async fn delete_group(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match GroupService::delete(app_state.db(), id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
