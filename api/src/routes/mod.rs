//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by resource, each guarded per route by the access
//! control middleware in [`crate::auth::guards`].
//!
//! Route groups:
//! - `/health` → Health check (public)
//! - `/auth` → Login, registration, profile
//! - `/teachers` → Teachers, their ratings and reports
//! - `/students` → Students and rating eligibility
//! - `/ratings` → Ratings
//! - `/subjects` → Subjects
//! - `/class-schedules` → Individual classes
//! - `/weekly-schedules` → Weekly timetables
//! - `/groups` → Student groups

use crate::routes::{
    auth::auth_routes, class_schedules::class_schedules_routes, groups::groups_routes,
    health::health_routes, ratings::ratings_routes, students::students_routes,
    subjects::subjects_routes, teachers::teachers_routes,
    weekly_schedules::weekly_schedules_routes,
};
use axum::Router;
use util::state::AppState;

pub mod auth;
pub mod class_schedules;
pub mod groups;
pub mod health;
pub mod ratings;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod weekly_schedules;

/// Builds the complete application router for all HTTP endpoints.
///
/// Mounted under `/api` by the binary and by the integration tests.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/teachers", teachers_routes())
        .nest("/students", students_routes())
        .nest("/ratings", ratings_routes())
        .nest("/subjects", subjects_routes())
        .nest("/class-schedules", class_schedules_routes())
        .nest("/weekly-schedules", weekly_schedules_routes())
        .nest("/groups", groups_routes())
        .with_state(app_state)
}
