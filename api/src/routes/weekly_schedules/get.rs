use crate::response::{error_response, ok};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use services::weekly_schedule::WeeklyScheduleService;
use util::state::AppState;

/// GET /api/weekly-schedules
///
/// Every weekly schedule with its classes ordered by day, then pair.
pub async fn list_weekly_schedules(State(app_state): State<AppState>) -> impl IntoResponse {
    match WeeklyScheduleService::list(app_state.db()).await {
        Ok(schedules) => ok(schedules, "Weekly schedules retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/weekly-schedules/{id}
pub async fn get_weekly_schedule(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match WeeklyScheduleService::get(app_state.db(), id).await {
        Ok(schedule) => ok(schedule, "Weekly schedule retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/weekly-schedules/group/{group_number}/week/{week_number}
///
/// - `200 OK`
/// - `404 Not Found` - No schedule for that group and week
pub async fn get_schedule_by_group_week(
    State(app_state): State<AppState>,
    Path((group_number, week_number)): Path<(String, i32)>,
) -> impl IntoResponse {
    match WeeklyScheduleService::by_group_week(app_state.db(), &group_number, week_number).await {
        Ok(schedule) => ok(schedule, "Weekly schedule retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/weekly-schedules/{id}/teachers
///
/// Distinct teacher names in timetable order.
pub async fn get_schedule_teachers(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match WeeklyScheduleService::teachers(app_state.db(), id).await {
        Ok(teachers) => ok(teachers, "Schedule teachers retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/weekly-schedules/{id}/statistics
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "total_classes": 12,
///     "class_types": { "lab": 4, "lecture": 8 },
///     "teachers_count": 3
///   },
///   "message": "Schedule statistics retrieved successfully"
/// }
/// ```
pub async fn get_schedule_statistics(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match WeeklyScheduleService::statistics(app_state.db(), id).await {
        Ok(stats) => ok(stats, "Schedule statistics retrieved successfully"),
        Err(e) => error_response(e),
    }
}

/// GET /api/weekly-schedules/{id}/day/{day}
///
/// Classes of one weekday (1 = Monday .. 7 = Sunday), ordered by pair.
///
/// - `400 Bad Request` - `day` outside 1..=7
/// - `404 Not Found` - Unknown schedule
pub async fn get_schedule_day(
    State(app_state): State<AppState>,
    Path((id, day)): Path<(i64, i32)>,
) -> impl IntoResponse {
    match WeeklyScheduleService::day(app_state.db(), id, day).await {
        Ok(classes) => ok(classes, "Schedule day retrieved successfully"),
        Err(e) => error_response(e),
    }
}
