use crate::auth::AuthUser;
use crate::response::{error_response, no_content};
use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use services::rating::{RatingService, UpdateRating};
use util::state::AppState;

/// PUT /api/ratings/{id}
///
/// Replace score, review and anonymity. The rating's date is reset to now.
///
/// - `204 No Content`
/// - `400 Bad Request` - Invalid score or review
/// - `403 Forbidden` - A student editing someone else's rating
/// - `404 Not Found` - Unknown rating
pub async fn update_rating(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRating>,
) -> impl IntoResponse {
    match RatingService::update(app_state.db(), &user.caller(), id, req).await {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
