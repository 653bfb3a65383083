use crate::auth::AuthUser;
use crate::response::{error_response, ok};
use axum::{
    Extension,
    extract::{Path, State},
    response::IntoResponse,
};
use services::student::StudentService;
use util::state::AppState;

/// GET /api/students
///
/// List students ordered by last name, each with their group and the number
/// of ratings they have left.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 1, "full_name": "Михайлова Екатерина Сергеевна", "group_number": "АС-22-04", "ratings_count": 1 }
///   ],
///   "message": "Students retrieved successfully"
/// }
/// ```
pub async fn list_students(State(app_state): State<AppState>) -> impl IntoResponse {
    match StudentService::list(app_state.db()).await {
        Ok(students) => ok(students, "Students retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/students/{id}
///
/// One student with names, group, the ratings they left (with teacher) and
/// every teacher they may rate. Anonymous ratings are omitted.
///
/// - `200 OK`
/// - `404 Not Found` - Unknown student
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match StudentService::get(app_state.db(), None, id).await {
        Ok(student) => ok(student, "Student retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/students/by-group/{group_number}
pub async fn get_students_by_group(
    State(app_state): State<AppState>,
    Path(group_number): Path<String>,
) -> impl IntoResponse {
    match StudentService::by_group(app_state.db(), &group_number).await {
        Ok(students) => ok(students, "Students retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/students/{id}/teachers
///
/// Teachers of the student's group together with individually assigned
/// teachers, each with their average rating.
///
/// - `200 OK`
/// - `404 Not Found` - Unknown student
pub async fn get_student_teachers(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match StudentService::teachers(app_state.db(), id).await {
        Ok(teachers) => ok(teachers, "Student teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/students/{id}/can-rate/{teacher_id}
///
/// Whether the student may rate the teacher: the teacher must teach the
/// student and no rating for the pair may exist yet.
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "student_id": 1,
///     "teacher_id": 2,
///     "teaches_student": true,
///     "already_rated": false,
///     "can_rate": true
///   },
///   "message": "Rating eligibility checked"
/// }
/// ```
/// - `404 Not Found` - Unknown student or teacher
pub async fn student_can_rate(
    State(app_state): State<AppState>,
    Path((id, teacher_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match StudentService::can_rate(app_state.db(), id, teacher_id).await {
        Ok(result) => ok(result, "Rating eligibility checked"),
        Err(e) => error_response(e),
    }
}

/// GET /api/students/{id}/ratings-report
///
/// Anonymous ratings are included only for the student themselves and
/// administrators.
pub async fn get_student_ratings_report(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match StudentService::ratings_report(app_state.db(), &user.caller(), id).await {
        Ok(ratings) => ok(ratings, "Student ratings report generated successfully"),
        Err(e) => error_response(e),
    }
}
