use crate::response::{error_response, ok};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::group::GroupService;
use util::state::AppState;

/// GET /api/groups
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 1, "group_number": "АС-22-04", "students_count": 3, "teachers_count": 2 }
///   ],
///   "message": "Groups retrieved successfully"
/// }
/// ```
pub async fn list_groups(State(app_state): State<AppState>) -> impl IntoResponse {
    match GroupService::list(app_state.db()).await {
        Ok(groups) => ok(groups, "Groups retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/groups/{id}
pub async fn get_group(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match GroupService::get(app_state.db(), id).await {
        Ok(group) => ok(group, "Group retrieved successfully"),
        Err(e) => error_response(e),
    }
}
