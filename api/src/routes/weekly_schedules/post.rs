use crate::response::{created, error_response};
use axum::{Json, extract::State, response::IntoResponse};
use services::weekly_schedule::{WeeklyScheduleInput, WeeklyScheduleService};
use util::state::AppState;

/// POST /api/weekly-schedules
///
/// Create a weekly schedule and all of its classes in one transaction. Every
/// class takes the schedule's group number.
///
/// ### Request Body
/// ```json
/// {
///   "group_number": "АС-22-04",
///   "week_number": 36,
///   "classes": [
///     {
///       "subject_id": 1,
///       "date": "2025-09-01",
///       "pair_number": 1,
///       "classroom": "A-101",
///       "class_type": "Lecture",
///       "teacher_name": "Тупысев Антон Михайлович"
///     }
///   ]
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` - Invalid fields, an unknown subject, or more than
///   seven classes on one day
/// - `409 Conflict` - The group already has a schedule for that week
pub async fn create_weekly_schedule(
    State(app_state): State<AppState>,
    Json(req): Json<WeeklyScheduleInput>,
) -> impl IntoResponse {
    match WeeklyScheduleService::create(app_state.db(), req).await {
        Ok(schedule) => created(schedule, "Weekly schedule created successfully"),
        Err(e) => error_response(e),
    }
}
