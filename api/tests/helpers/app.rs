use api::{auth::generate_jwt, routes::routes};
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use db::models::user::{self, Role};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use util::{config::AppConfig, state::AppState};

pub const TEST_JWT_SECRET: &str = "test-secret-do-not-use";

/// Router mounted under `/api` over a fresh in-memory database with seed data.
pub async fn make_test_app() -> (Router, AppState) {
    AppConfig::set_jwt_secret(TEST_JWT_SECRET);

    let db = setup_test_db().await;
    let app_state = AppState::new(db);
    let router = Router::new().nest("/api", routes(app_state.clone()));

    (router, app_state)
}

pub fn token_for(username: &str, role: Role) -> String {
    let (token, _) = generate_jwt(username, role).expect("Failed to sign test token");
    token
}

/// Creates a student account linked to `student_id` and returns its token.
pub async fn student_token(db: &DatabaseConnection, username: &str, student_id: i64) -> String {
    user::Model::create(db, username, "secret123", Role::Student, Some(student_id), None)
        .await
        .expect("Failed to create student account");
    token_for(username, Role::Student)
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&body).unwrap()
}

/// Runs a single request against the router and returns status plus decoded body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request(method, uri, token, body))
        .await
        .unwrap();
    let status = response.status();
    (status, json_body(response).await)
}
