//! # Class Schedules Routes Module
//!
//! `/api/class-schedules`: individual class slots. Reads for any
//! authenticated user, writes for administrators.

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_class_schedule;
use get::{
    get_class_schedule, get_classes_by_date, get_classes_by_group, get_classes_by_teacher,
    get_classes_by_type, get_classes_with_subject_info, get_classrooms_by_date,
    list_class_schedules,
};
use post::create_class_schedule;
use put::update_class_schedule;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/class-schedules` route group.
///
/// - `GET /class-schedules` → `list_class_schedules`
/// - `GET /class-schedules/{id}` → `get_class_schedule`
/// - `GET /class-schedules/group/{group_number}` → `get_classes_by_group`
/// - `GET /class-schedules/teacher/{name}` → `get_classes_by_teacher`
/// - `GET /class-schedules/date/{date}` → `get_classes_by_date`
/// - `GET /class-schedules/type/{class_type}` → `get_classes_by_type`
/// - `GET /class-schedules/classrooms/{date}` → `get_classrooms_by_date`
/// - `GET /class-schedules/with-subject-info` → `get_classes_with_subject_info`
/// - `POST /class-schedules` → `create_class_schedule` (admin)
/// - `PUT /class-schedules/{id}` → `update_class_schedule` (admin)
/// - `DELETE /class-schedules/{id}` → `delete_class_schedule` (admin)
pub fn class_schedules_routes() -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(list_class_schedules))
        .route("/{id}", get(get_class_schedule))
        .route("/group/{group_number}", get(get_classes_by_group))
        .route("/teacher/{name}", get(get_classes_by_teacher))
        .route("/date/{date}", get(get_classes_by_date))
        .route("/type/{class_type}", get(get_classes_by_type))
        .route("/classrooms/{date}", get(get_classrooms_by_date))
        .route("/with-subject-info", get(get_classes_with_subject_info))
        .route_layer(from_fn(allow_authenticated));

    let writes = Router::new()
        .route("/", post(create_class_schedule))
        .route("/{id}", put(update_class_schedule))
        .route("/{id}", delete(delete_class_schedule))
        .route_layer(from_fn(allow_admin));

    reads.merge(writes)
}
