//! # Weekly Schedules Routes Module
//!
//! `/api/weekly-schedules`: a group's timetable for one week of the year.
//! Reads for any authenticated user, writes for administrators.

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_weekly_schedule;
use get::{
    get_schedule_by_group_week, get_schedule_day, get_schedule_statistics,
    get_schedule_teachers, get_weekly_schedule, list_weekly_schedules,
};
use post::create_weekly_schedule;
use put::update_weekly_schedule;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/weekly-schedules` route group.
///
/// - `GET /weekly-schedules` → `list_weekly_schedules`
/// - `GET /weekly-schedules/{id}` → `get_weekly_schedule`
/// - `GET /weekly-schedules/group/{group_number}/week/{week_number}` → `get_schedule_by_group_week`
/// - `GET /weekly-schedules/{id}/teachers` → `get_schedule_teachers`
/// - `GET /weekly-schedules/{id}/statistics` → `get_schedule_statistics`
/// - `GET /weekly-schedules/{id}/day/{day}` → `get_schedule_day`
/// - `POST /weekly-schedules` → `create_weekly_schedule` (admin)
/// - `PUT /weekly-schedules/{id}` → `update_weekly_schedule` (admin)
/// - `DELETE /weekly-schedules/{id}` → `delete_weekly_schedule` (admin)
pub fn weekly_schedules_routes() -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(list_weekly_schedules))
        .route("/{id}", get(get_weekly_schedule))
        .route(
            "/group/{group_number}/week/{week_number}",
            get(get_schedule_by_group_week),
        )
        .route("/{id}/teachers", get(get_schedule_teachers))
        .route("/{id}/statistics", get(get_schedule_statistics))
        .route("/{id}/day/{day}", get(get_schedule_day))
        .route_layer(from_fn(allow_authenticated));

    let writes = Router::new()
        .route("/", post(create_weekly_schedule))
        .route("/{id}", put(update_weekly_schedule))
        .route("/{id}", delete(delete_weekly_schedule))
        .route_layer(from_fn(allow_admin));

    reads.merge(writes)
}
