use crate::auth::AuthUser;
use crate::response::{error_response, no_content};
use axum::{
    Extension,
    extract::{Path, State},
    response::IntoResponse,
};
use services::rating::RatingService;
use util::state::AppState;

/// DELETE /api/ratings/{id}
///
/// - `204 No Content`
/// - `403 Forbidden` - A student deleting someone else's rating
/// - `404 Not Found` - Unknown rating
pub async fn delete_rating(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match RatingService::delete(app_state.db(), &user.caller(), id).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
