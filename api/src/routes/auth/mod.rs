//! # auth Routes Module
//!
//! Routes for the `/auth` endpoint group.
//!
//! ## Structure
//! - `post.rs`: POST handlers (login, register)
//! - `get.rs`: GET handlers (profile of the current user)
//!
//! ## Usage
//! The `auth_routes()` function returns a `Router` which is nested under `/auth` in the main application.

pub mod get;
pub mod post;

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use get::get_profile;
use post::{login, register};
use util::state::AppState;

/// Builds the `/auth` route group, mapping HTTP methods to handlers.
///
/// - `POST /auth/login` → `login`
/// - `POST /auth/register` → `register`
/// - `GET /auth/profile` → `get_profile` (authenticated)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route(
            "/profile",
            get(get_profile).route_layer(from_fn(allow_authenticated)),
        )
}
