//! # Teachers Routes Module
//!
//! Routes for the `/api/teachers` endpoint group.
//!
//! ## Structure
//! - `get.rs`: listings, details, rating queries and reports
//! - `post.rs`: create teacher, link a teacher to a group
//! - `put.rs`: update teacher
//! - `delete.rs`: delete teacher, unlink a group
//!
//! ## Access
//! Listing and detail are public. Rating queries and reports require a valid
//! token. Every write is admin-only.

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::{delete_teacher, remove_teacher_group};
use get::{
    get_average_rating, get_group_statistics, get_teacher, get_teacher_report,
    get_teachers_by_group, get_teachers_by_rating_range, get_teachers_with_ratings,
    get_teachers_without_ratings, get_top_teachers, list_teachers,
};
use post::{add_teacher_group, create_teacher};
use put::update_teacher;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/teachers` route group.
///
/// - `GET /teachers` → `list_teachers` (public)
/// - `GET /teachers/{id}` → `get_teacher` (public)
/// - `POST /teachers` → `create_teacher` (admin)
/// - `PUT /teachers/{id}` → `update_teacher` (admin)
/// - `DELETE /teachers/{id}` → `delete_teacher` (admin)
/// - `GET /teachers/top/{count}` → `get_top_teachers` (authenticated)
/// - `GET /teachers/with-ratings` → `get_teachers_with_ratings` (authenticated)
/// - `GET /teachers/without-ratings` → `get_teachers_without_ratings` (authenticated)
/// - `GET /teachers/rating-range?min=&max=` → `get_teachers_by_rating_range` (authenticated)
/// - `GET /teachers/{id}/average-rating` → `get_average_rating` (authenticated)
/// - `GET /teachers/by-group/{group_number}` → `get_teachers_by_group` (authenticated)
/// - `GET /teachers/{id}/report` → `get_teacher_report` (authenticated)
/// - `GET /teachers/statistics/group/{group_number}` → `get_group_statistics` (authenticated)
/// - `POST /teachers/{id}/groups/{group_id}` → `add_teacher_group` (admin)
/// - `DELETE /teachers/{id}/groups/{group_id}` → `remove_teacher_group` (admin)
pub fn teachers_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers))
        .route("/", post(create_teacher).route_layer(from_fn(allow_admin)))
        .route("/{id}", get(get_teacher))
        .route("/{id}", put(update_teacher).route_layer(from_fn(allow_admin)))
        .route("/{id}", delete(delete_teacher).route_layer(from_fn(allow_admin)))
        .route(
            "/top/{count}",
            get(get_top_teachers).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/with-ratings",
            get(get_teachers_with_ratings).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/without-ratings",
            get(get_teachers_without_ratings).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/rating-range",
            get(get_teachers_by_rating_range).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{id}/average-rating",
            get(get_average_rating).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/by-group/{group_number}",
            get(get_teachers_by_group).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{id}/report",
            get(get_teacher_report).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/statistics/group/{group_number}",
            get(get_group_statistics).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{id}/groups/{group_id}",
            post(add_teacher_group).route_layer(from_fn(allow_admin)),
        )
        .route(
            "/{id}/groups/{group_id}",
            delete(remove_teacher_group).route_layer(from_fn(allow_admin)),
        )
}
