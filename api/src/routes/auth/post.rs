use crate::auth::generate_jwt;
use crate::response::{ApiResponse, created, error_response, ok};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Role;
use serde::Serialize;
use services::auth::{AuthService, AuthenticatedUser, LoginRequest, RegisterRequest};
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub expiration: String,
    pub username: String,
    pub role: Role,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

/// Issues a token for `user`, or `None` when signing fails.
fn issue_token(user: AuthenticatedUser) -> Option<TokenResponse> {
    match generate_jwt(&user.username, user.role) {
        Ok((token, expiration)) => Some(TokenResponse {
            token,
            expiration,
            username: user.username,
            role: user.role,
            student_id: user.student_id,
            teacher_id: user.teacher_id,
        }),
        Err(e) => {
            tracing::error!(error = %e, username = %user.username, "Failed to sign token");
            None
        }
    }
}

fn token_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("Failed to issue token")),
    )
        .into_response()
}

/// POST /api/auth/login
///
/// Authenticate and receive a JWT.
///
/// ### Request Body
/// ```json
/// {
///   "username": "admin",
///   "password": "admin123"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "jwt_token_here",
///     "expiration": "2025-05-23T11:00:00+00:00",
///     "username": "admin",
///     "role": "Admin",
///     "student_id": null,
///     "teacher_id": null
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `400 Bad Request` - Empty username or password
/// - `401 Unauthorized` - Invalid username or password
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let user = match AuthService::login(app_state.db(), req).await {
        Ok(user) => user,
        Err(e) => return error_response(e),
    };

    match issue_token(user) {
        Some(token) => ok(token, "Login successful"),
        None => token_failure(),
    }
}

/// POST /api/auth/register
///
/// Register an account. `Student` and `Teacher` accounts must point at an
/// existing student or teacher. Administrator accounts cannot be registered.
///
/// ### Request Body
/// ```json
/// {
///   "username": "kate",
///   "password": "secret123",
///   "role": "Student",
///   "student_id": 1
/// }
/// ```
///
/// ### Responses
///
/// - `201 Created` - Same payload as login
/// - `400 Bad Request` - Invalid fields, unknown role, `Admin` role, or missing/unknown link
/// - `409 Conflict` - Username is already taken
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    let user = match AuthService::register(app_state.db(), req).await {
        Ok(user) => user,
        Err(e) => return error_response(e),
    };

    match issue_token(user) {
        Some(token) => created(token, "User registered successfully"),
        None => token_failure(),
    }
}
