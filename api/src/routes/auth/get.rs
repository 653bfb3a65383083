use crate::auth::AuthUser;
use crate::response::{error_response, ok};
use axum::{Extension, extract::State, response::IntoResponse};
use services::auth::AuthService;
use util::state::AppState;

/// GET /api/auth/profile
///
/// The account behind the token, with the linked student or teacher.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 3,
///     "username": "kate",
///     "role": "Student",
///     "created_at": "2025-09-01T08:00:00Z",
///     "student": { "id": 1, "full_name": "Михайлова Екатерина Сергеевна", "group_number": "АС-22-04" },
///     "teacher": null
///   },
///   "message": "Profile retrieved successfully"
/// }
/// ```
///
/// - `401 Unauthorized` - Missing or invalid JWT
/// - `404 Not Found` - Built-in accounts have no stored profile
pub async fn get_profile(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    match AuthService::profile(app_state.db(), &user.0.sub).await {
        Ok(profile) => ok(profile, "Profile retrieved successfully"),
        Err(e) => error_response(e),
    }
}
