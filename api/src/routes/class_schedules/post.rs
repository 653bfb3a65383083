use crate::response::{created, error_response};
use axum::{Json, extract::State, response::IntoResponse};
use services::class_schedule::{ClassScheduleInput, ClassScheduleService};
use util::state::AppState;

/// POST /api/class-schedules
///
/// ### Request Body
/// ```json
/// {
///   "subject_id": 1,
///   "date": "2025-09-01",
///   "pair_number": 2,
///   "classroom": "A-101",
///   "group_number": "АС-22-04",
///   "class_type": "Lecture",
///   "teacher_name": "Тупысев Антон Михайлович",
///   "weekly_schedule_id": null
/// }
/// ```
///
/// `day_of_week` may be given explicitly (1 = Monday); otherwise it is taken
/// from `date`.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` - Pair or day outside 1..=7, malformed group number,
///   blank text fields, unknown subject or weekly schedule, or a full day in
///   the weekly schedule
pub async fn create_class_schedule(
    State(app_state): State<AppState>,
    Json(req): Json<ClassScheduleInput>,
) -> impl IntoResponse {
    match ClassScheduleService::create(app_state.db(), req).await {
        Ok(class) => created(class, "Class schedule created successfully"),
        Err(e) => error_response(e),
    }
}
