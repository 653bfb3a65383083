//! # Groups Routes Module
//!
//! `/api/groups`: student cohorts. Reads for any authenticated user,
//! writes for administrators.

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post},
};
use delete::delete_group;
use get::{get_group, list_groups};
use post::create_group;
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;

/// Builds the `/groups` route group.
///
/// - `GET /groups` → `list_groups` (authenticated)
/// - `GET /groups/{id}` → `get_group` (authenticated)
/// - `POST /groups` → `create_group` (admin)
/// - `DELETE /groups/{id}` → `delete_group` (admin)
pub fn groups_routes() -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(list_groups))
        .route("/{id}", get(get_group))
        .route_layer(from_fn(allow_authenticated));

    let writes = Router::new()
        .route("/", post(create_group))
        .route("/{id}", delete(delete_group))
        .route_layer(from_fn(allow_admin));

    reads.merge(writes)
}
