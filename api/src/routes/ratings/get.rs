use crate::auth::AuthUser;
use crate::response::{error_response, ok};
use axum::{
    Extension,
    extract::{Path, State},
    response::IntoResponse,
};
use services::rating::RatingService;
use util::state::AppState;

/// GET /api/ratings
///
/// Every rating, newest first, with teacher and (unless anonymous) author.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 1,
///       "score": 4,
///       "stars": "★★★★☆",
///       "review": "Clear lectures",
///       "is_anonymous": false,
///       "reviewer_name": "Михайлова Е.",
///       "created_date": "2025-09-01T10:00:00Z",
///       "teacher": { "id": 1, "full_name": "Михайлова Татьяна Папилина" },
///       "student": { "id": 1, "full_name": "Михайлова Екатерина Сергеевна", "group_number": "АС-22-04" }
///     }
///   ],
///   "message": "Ratings retrieved successfully"
/// }
/// ```
///
/// - `401 Unauthorized` - Missing or invalid JWT
pub async fn list_ratings(State(app_state): State<AppState>) -> impl IntoResponse {
    match RatingService::list(app_state.db()).await {
        Ok(ratings) => ok(ratings, "Ratings retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/ratings/{id}
pub async fn get_rating(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match RatingService::get(app_state.db(), id).await {
        Ok(rating) => ok(rating, "Rating retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/ratings/by-teacher/{teacher_id}
///
/// - `200 OK`
/// - `404 Not Found` - Unknown teacher
pub async fn get_ratings_by_teacher(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> impl IntoResponse {
    match RatingService::by_teacher(app_state.db(), teacher_id).await {
        Ok(ratings) => ok(ratings, "Ratings retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/ratings/by-student/{student_id}
///
/// Anonymous ratings are listed only for their author and administrators.
///
/// - `200 OK`
/// - `404 Not Found` - Unknown student
pub async fn get_ratings_by_student(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    match RatingService::by_student(app_state.db(), &user.caller(), student_id).await {
        Ok(ratings) => ok(ratings, "Ratings retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/ratings/recent/{count}
///
/// The `count` most recent ratings, 1..=100.
pub async fn get_recent_ratings(
    State(app_state): State<AppState>,
    Path(count): Path<u64>,
) -> impl IntoResponse {
    match RatingService::recent(app_state.db(), count).await {
        Ok(ratings) => ok(ratings, "Recent ratings retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/ratings/anonymous
pub async fn get_anonymous_ratings(State(app_state): State<AppState>) -> impl IntoResponse {
    match RatingService::anonymous(app_state.db()).await {
        Ok(ratings) => ok(ratings, "Anonymous ratings retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/ratings/with-details
///
/// Flat rows with teacher name and, for signed ratings, student name and
/// group number.
pub async fn get_ratings_with_details(State(app_state): State<AppState>) -> impl IntoResponse {
    match RatingService::with_details(app_state.db()).await {
        Ok(ratings) => ok(ratings, "Ratings retrieved successfully"),
        Err(e) => error_response(e),
    }
}
