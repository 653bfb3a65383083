use crate::auth::AuthUser;
use crate::response::{created, error_response};
use axum::{Extension, Json, extract::State, response::IntoResponse};
use services::rating::{CreateRating, RatingService};
use util::state::AppState;

/// POST /api/ratings
///
/// Rate a teacher. Administrators must name the `student_id` they rate for;
/// students always rate as the student linked to their account.
///
/// ### Request Body
/// ```json
/// {
///   "teacher_id": 2,
///   "student_id": 1,
///   "score": 5,
///   "review": "Explains everything twice",
///   "is_anonymous": true
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` - The stored rating
/// - `400 Bad Request` - Score outside 1..=5, review over 1000 characters,
///   unknown student or teacher, or the teacher does not teach the student
/// - `401 Unauthorized` - Missing or invalid JWT
/// - `403 Forbidden` - Not an administrator or student, or a student rating as someone else
/// - `409 Conflict` - The student already rated this teacher
pub async fn create_rating(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateRating>,
) -> impl IntoResponse {
    match RatingService::create(app_state.db(), &user.caller(), req).await {
        Ok(rating) => created(rating, "Rating created successfully"),
        Err(e) => error_response(e),
    }
}
