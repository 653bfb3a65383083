use crate::response::{created, error_response};
use axum::{Json, extract::State, response::IntoResponse};
use services::group::{GroupInput, GroupService};
use util::state::AppState;

/// POST /api/groups
///
/// ### Request Body
/// ```json
/// { "group_number": "АС-23-01" }
/// ```
///
/// - `201 Created`
/// - `400 Bad Request` - Group number does not look like `АС-22-04`
/// - `409 Conflict` - Group number already exists
pub async fn create_group(
    State(app_state): State<AppState>,
    Json(req): Json<GroupInput>,
) -> impl IntoResponse {
    match GroupService::create(app_state.db(), req).await {
        Ok(group) => created(group, "Group created successfully"),
        Err(e) => error_response(e),
    }
}
