use crate::response::{error_response, ok};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::class_schedule::ClassScheduleService;
use util::state::AppState;

/// GET /api/class-schedules
///
/// All classes ordered by date, then pair.
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
///       "subject_id": 1,
///       "subject_name": "Databases",
///       "date": "2025-09-01",
///       "day_of_week": 1,
///       "day_name": "Monday",
///       "pair_number": 2,
///       "pair_time": "10:15 - 11:45",
///       "classroom": "A-101",
///       "group_number": "АС-22-04",
///       "class_type": "lecture",
///       "teacher_name": "Тупысев Антон Михайлович",
///       "weekly_schedule_id": null
///     }
///   ],
///   "message": "Class schedules retrieved successfully"
/// }
/// ```
pub async fn list_class_schedules(State(app_state): State<AppState>) -> impl IntoResponse {
    match ClassScheduleService::list(app_state.db()).await {
        Ok(classes) => ok(classes, "Class schedules retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/class-schedules/{id}
pub async fn get_class_schedule(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match ClassScheduleService::get(app_state.db(), id).await {
        Ok(class) => ok(class, "Class schedule retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/class-schedules/group/{group_number}
///
/// - `200 OK` - Classes ordered by date, then pair
/// - `400 Bad Request` - Malformed group number
pub async fn get_classes_by_group(
    State(app_state): State<AppState>,
    Path(group_number): Path<String>,
) -> impl IntoResponse {
    match ClassScheduleService::by_group(app_state.db(), &group_number).await {
        Ok(classes) => ok(classes, "Class schedules retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/class-schedules/teacher/{name}
///
/// Classes whose teacher name contains `name`.
pub async fn get_classes_by_teacher(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match ClassScheduleService::by_teacher(app_state.db(), &name).await {
        Ok(classes) => ok(classes, "Class schedules retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/class-schedules/date/{date}
///
/// `date` is `YYYY-MM-DD`. Classes are ordered by pair.
///
/// - `400 Bad Request` - Malformed date
pub async fn get_classes_by_date(
    State(app_state): State<AppState>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    match ClassScheduleService::by_date(app_state.db(), &date).await {
        Ok(classes) => ok(classes, "Class schedules retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/class-schedules/type/{class_type}
pub async fn get_classes_by_type(
    State(app_state): State<AppState>,
    Path(class_type): Path<String>,
) -> impl IntoResponse {
    match ClassScheduleService::by_type(app_state.db(), &class_type).await {
        Ok(classes) => ok(classes, "Class schedules retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/class-schedules/classrooms/{date}
///
/// Distinct classrooms booked on `date`, sorted.
///
/// - `200 OK`
/// ```json
/// { "success": true, "data": ["A-101", "B-204"], "message": "Classrooms retrieved successfully" }
/// ```
pub async fn get_classrooms_by_date(
    State(app_state): State<AppState>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    match ClassScheduleService::classrooms(app_state.db(), &date).await {
        Ok(rooms) => ok(rooms, "Classrooms retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/class-schedules/with-subject-info
pub async fn get_classes_with_subject_info(
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    match ClassScheduleService::with_subject_info(app_state.db()).await {
        Ok(classes) => ok(classes, "Class schedules retrieved successfully"),
        Err(e) => error_response(e),
    }
}
