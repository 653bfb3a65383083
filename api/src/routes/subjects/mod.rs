//! # Subjects Routes Module
//!
//! `/api/subjects`: reads for any authenticated user, writes for administrators.

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use delete::delete_subject;
use get::{get_subject, list_subjects};
use post::create_subject;
use put::update_subject;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/subjects` route group.
///
/// - `GET /subjects` → `list_subjects` (authenticated)
/// - `GET /subjects/{id}` → `get_subject` (authenticated)
/// - `POST /subjects` → `create_subject` (admin)
/// - `PUT /subjects/{id}` → `update_subject` (admin)
/// - `DELETE /subjects/{id}` → `delete_subject` (admin)
pub fn subjects_routes() -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(list_subjects))
        .route("/{id}", get(get_subject))
        .route_layer(from_fn(allow_authenticated));

    let writes = Router::new()
        .route("/", post(create_subject))
        .route("/{id}", put(update_subject))
        .route("/{id}", delete(delete_subject))
        .route_layer(from_fn(allow_admin));

    reads.merge(writes)
}
