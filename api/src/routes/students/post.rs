use crate::response::{created, error_response, no_content};
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use services::student::{StudentInput, StudentService};
use util::state::AppState;

/// POST /api/students
///
/// Create a student in an existing group. Admin only.
///
/// ### Request Body
/// ```json
/// {
///   "first_name": "Екатерина",
///   "last_name": "Ткачева",
///   "middle_name": "Дмитриевна",
///   "group_id": 1
/// }
/// ```
///
/// ### Responses
/// - `201 Created` - The new student in detail form
/// - `400 Bad Request` - Blank names or unknown `group_id`
/// - `401 Unauthorized` / `403 Forbidden`
pub async fn create_student(
    State(app_state): State<AppState>,
    Json(req): Json<StudentInput>,
) -> impl IntoResponse {
    match StudentService::create(app_state.db(), req).await {
        Ok(student) => created(student, "Student created successfully"),
        Err(e) => error_response(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct AssignTeacherQuery {
    pub student_id: i64,
    pub teacher_id: i64,
}

/// POST /api/students/assign-teacher?student_id=1&teacher_id=3
///
/// Assign a teacher to a student individually, outside the group link.
///
/// - `204 No Content`
/// - `404 Not Found` - Unknown student or teacher
/// - `409 Conflict` - Already assigned
pub async fn assign_teacher(
    State(app_state): State<AppState>,
    Query(query): Query<AssignTeacherQuery>,
) -> impl IntoResponse {
    match StudentService::assign_teacher(app_state.db(), query.student_id, query.teacher_id).await
    {
        Ok(()) => no_content(),
        Err(e) => error_response(e),
    }
}
