//! # Students Routes Module
//!
//! Routes for the `/api/students` endpoint group.
//!
//! ## Structure
//! - `get.rs`: listings, details and per-student rating views
//! - `post.rs`: create student, assign an individual teacher
//! - `put.rs`: update student
//! - `delete.rs`: delete student
//!
//! ## Access
//! Listing and detail are public, writes are admin-only, everything else
//! requires a valid token.

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_student;
use get::{
    get_student, get_student_ratings_report, get_student_teachers, get_students_by_group,
    list_students, student_can_rate,
};
use post::{assign_teacher, create_student};
use put::update_student;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/students` route group.
///
/// - `GET /students` → `list_students` (public)
/// - `GET /students/{id}` → `get_student` (public)
/// - `POST /students` → `create_student` (admin)
/// - `PUT /students/{id}` → `update_student` (admin)
/// - `DELETE /students/{id}` → `delete_student` (admin)
/// - `POST /students/assign-teacher?student_id=&teacher_id=` → `assign_teacher` (admin)
/// - `GET /students/by-group/{group_number}` → `get_students_by_group` (authenticated)
/// - `GET /students/{id}/teachers` → `get_student_teachers` (authenticated)
/// - `GET /students/{id}/can-rate/{teacher_id}` → `student_can_rate` (authenticated)
/// - `GET /students/{id}/ratings-report` → `get_student_ratings_report` (authenticated)
pub fn students_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/", post(create_student).route_layer(from_fn(allow_admin)))
        .route("/{id}", get(get_student))
        .route("/{id}", put(update_student).route_layer(from_fn(allow_admin)))
        .route("/{id}", delete(delete_student).route_layer(from_fn(allow_admin)))
        .route(
            "/assign-teacher",
            post(assign_teacher).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/by-group/{group_number}",
            get(get_students_by_group).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{id}/teachers",
            get(get_student_teachers).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{id}/can-rate/{teacher_id}",
            get(student_can_rate).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{id}/ratings-report",
            get(get_student_ratings_report).route_layer(from_fn(allow_authenticated)),
        )
}
