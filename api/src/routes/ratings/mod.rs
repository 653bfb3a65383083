//! # Ratings Routes Module
//!
//! Routes for the `/api/ratings` endpoint group. Every route requires a
//! valid token. Creating, editing and deleting ratings is open to
//! administrators and students; students may only touch their own ratings,
//! which the rating service enforces per record.

use crate::auth::guards::{allow_admin_or_student, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_rating;
use get::{
    get_anonymous_ratings, get_rating, get_ratings_by_student, get_ratings_by_teacher,
    get_ratings_with_details, get_recent_ratings, list_ratings,
};
use post::create_rating;
use put::update_rating;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/ratings` route group.
///
/// - `GET /ratings` → `list_ratings`
/// - `GET /ratings/{id}` → `get_rating`
/// - `GET /ratings/by-teacher/{teacher_id}` → `get_ratings_by_teacher`
/// - `GET /ratings/by-student/{student_id}` → `get_ratings_by_student`
/// - `GET /ratings/recent/{count}` → `get_recent_ratings`
/// - `GET /ratings/anonymous` → `get_anonymous_ratings`
/// - `GET /ratings/with-details` → `get_ratings_with_details`
/// - `POST /ratings` → `create_rating` (admin or student)
/// - `PUT /ratings/{id}` → `update_rating` (admin, or the student who wrote it)
/// - `DELETE /ratings/{id}` → `delete_rating` (admin, or the student who wrote it)
pub fn ratings_routes() -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(list_ratings))
        .route("/{id}", get(get_rating))
        .route("/by-teacher/{teacher_id}", get(get_ratings_by_teacher))
        .route("/by-student/{student_id}", get(get_ratings_by_student))
        .route("/recent/{count}", get(get_recent_ratings))
        .route("/anonymous", get(get_anonymous_ratings))
        .route("/with-details", get(get_ratings_with_details))
        .route_layer(from_fn(allow_authenticated));

    let writes = Router::new()
        .route("/", post(create_rating))
        .route("/{id}", put(update_rating))
        .route("/{id}", delete(delete_rating))
        .route_layer(from_fn(allow_admin_or_student));

    reads.merge(writes)
}
