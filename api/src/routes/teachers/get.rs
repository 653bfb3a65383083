use crate::response::{error_response, ok};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use services::{ServiceError, teacher::TeacherService};
use util::state::AppState;
use validator::Validate;

/// GET /api/teachers
///
/// List every teacher with their average score and number of ratings.
/// Teachers without ratings report an average of `0.0`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 1, "full_name": "Михайлова Татьяна Папилина", "average_rating": 4.5, "ratings_count": 2 }
///   ],
///   "message": "Teachers retrieved successfully"
/// }
/// ```
///
/// - `500 Internal Server Error` - Database error
pub async fn list_teachers(State(app_state): State<AppState>) -> impl IntoResponse {
    match TeacherService::list(app_state.db()).await {
        Ok(teachers) => ok(teachers, "Teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/{id}
///
/// Retrieve one teacher with the groups they teach, their ratings and the
/// students assigned to them individually. Anonymous ratings carry
/// `"reviewer_name": "Anonymous"`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 2,
///     "first_name": "Антон",
///     "last_name": "Тупысев",
///     "middle_name": "Михайлович",
///     "full_name": "Тупысев Антон Михайлович",
///     "average_rating": 5.0,
///     "ratings_count": 1,
///     "groups": ["АС-22-04", "АС-22-05"],
///     "ratings": [
///       { "id": 3, "score": 5, "stars": "★★★★★", "review": "Great", "is_anonymous": true,
///         "reviewer_name": "Anonymous", "created_date": "2025-09-01T10:00:00Z" }
///     ],
///     "students": []
///   },
///   "message": "Teacher retrieved successfully"
/// }
/// ```
///
/// - `404 Not Found` - Unknown teacher
pub async fn get_teacher(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match TeacherService::get(app_state.db(), id).await {
        Ok(teacher) => ok(teacher, "Teacher retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/top/{count}
///
/// Rated teachers ordered by average score (highest first), ties broken by
/// number of ratings. `count` must be between 1 and 100.
///
/// - `200 OK`
/// - `400 Bad Request` - `count` out of range
/// - `401 Unauthorized` - Missing or invalid JWT
pub async fn get_top_teachers(
    State(app_state): State<AppState>,
    Path(count): Path<u64>,
) -> impl IntoResponse {
    match TeacherService::top(app_state.db(), count).await {
        Ok(teachers) => ok(teachers, "Top teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/with-ratings
///
/// Teachers that have at least one rating, each with the full rating list.
pub async fn get_teachers_with_ratings(State(app_state): State<AppState>) -> impl IntoResponse {
    match TeacherService::with_ratings(app_state.db()).await {
        Ok(teachers) => ok(teachers, "Rated teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/without-ratings
pub async fn get_teachers_without_ratings(
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    match TeacherService::without_ratings(app_state.db()).await {
        Ok(teachers) => ok(teachers, "Unrated teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RatingRangeQuery {
    #[validate(range(min = 1.0, max = 5.0, message = "min must be between 1 and 5"))]
    pub min: f64,
    #[validate(range(min = 1.0, max = 5.0, message = "max must be between 1 and 5"))]
    pub max: f64,
}

/// GET /api/teachers/rating-range?min=3&max=5
///
/// Rated teachers whose average lies in the closed range `[min, max]`.
///
/// ### Query Parameters
/// - `min` (required): lower bound, 1..=5
/// - `max` (required): upper bound, `min..=5`
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` - Missing bounds, bounds outside 1..=5, or `min > max`
/// - `401 Unauthorized` - Missing or invalid JWT
pub async fn get_teachers_by_rating_range(
    State(app_state): State<AppState>,
    Query(query): Query<RatingRangeQuery>,
) -> impl IntoResponse {
    if let Err(e) = query.validate() {
        return error_response(ServiceError::from(e));
    }

    match TeacherService::by_rating_range(app_state.db(), query.min, query.max).await {
        Ok(teachers) => ok(teachers, "Teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/{id}/average-rating
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "teacher_id": 1, "full_name": "Михайлова Татьяна Папилина", "average_rating": 4.0, "ratings_count": 3 },
///   "message": "Average rating retrieved successfully"
/// }
/// ```
/// - `404 Not Found` - Unknown teacher
pub async fn get_average_rating(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match TeacherService::average_rating(app_state.db(), id).await {
        Ok(average) => ok(average, "Average rating retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/by-group/{group_number}
///
/// - `200 OK`
/// - `400 Bad Request` - Malformed group number
/// - `404 Not Found` - Unknown group
pub async fn get_teachers_by_group(
    State(app_state): State<AppState>,
    Path(group_number): Path<String>,
) -> impl IntoResponse {
    match TeacherService::by_group(app_state.db(), &group_number).await {
        Ok(teachers) => ok(teachers, "Teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/{id}/report
///
/// Full rating report for one teacher: average, total, the groups they teach
/// with student counts, and every rating with its author (or `Anonymous`) and
/// the author's group.
///
/// - `200 OK`
/// - `404 Not Found` - Unknown teacher
pub async fn get_teacher_report(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match TeacherService::report(app_state.db(), id).await {
        Ok(report) => ok(report, "Teacher report generated successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/teachers/statistics/group/{group_number}
///
/// Per teacher of the group: average, number of ratings and number of written
/// reviews, counting only ratings left by students of that group.
pub async fn get_group_statistics(
    State(app_state): State<AppState>,
    Path(group_number): Path<String>,
) -> impl IntoResponse {
    match TeacherService::group_statistics(app_state.db(), &group_number).await {
        Ok(stats) => ok(stats, "Group statistics retrieved successfully"),
        Err(e) => error_response(e),
    }
}
