#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, request, student_token, token_for};
    use axum::http::StatusCode;
    use db::models::user::Role;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn built_in_admin_logs_in() {
        let (app, _) = make_test_app().await;

        let body = json!({ "username": "admin", "password": "admin123" });
        let response = app
            .oneshot(request("POST", "/api/auth/login", None, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["role"], "Admin");
        assert_eq!(json["data"]["username"], "admin");
        assert!(json["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(json["data"]["expiration"].as_str().is_some());
    }

    #[tokio::test]
    #[serial]
    async fn wrong_password_is_unauthorized() {
        let (app, _) = make_test_app().await;

        let body = json!({ "username": "admin", "password": "nope" });
        let response = app
            .oneshot(request("POST", "/api/auth/login", None, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid username or password");
    }

    #[tokio::test]
    #[serial]
    async fn registered_student_can_log_in_and_read_profile() {
        let (app, _) = make_test_app().await;

        let body = json!({
            "username": "kate",
            "password": "secret123",
            "role": "Student",
            "student_id": 1
        });
        let response = app
            .clone()
            .oneshot(request("POST", "/api/auth/register", None, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = json_body(response).await;
        assert_eq!(json["data"]["student_id"], 1);

        let body = json!({ "username": "kate", "password": "secret123" });
        let response = app
            .clone()
            .oneshot(request("POST", "/api/auth/login", None, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let token = json_body(response).await["data"]["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(request("GET", "/api/auth/profile", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["data"]["username"], "kate");
        assert_eq!(json["data"]["student"]["group_number"], "АС-22-04");
        assert!(json["data"].get("password_hash").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn register_rejects_admin_role_and_duplicates() {
        let (app, state) = make_test_app().await;
        student_token(state.db(), "taken", 2).await;

        let admin = json!({ "username": "boss", "password": "secret123", "role": "Admin" });
        let response = app
            .clone()
            .oneshot(request("POST", "/api/auth/register", None, Some(admin)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let duplicate = json!({ "username": "taken", "password": "secret123", "role": "User" });
        let response = app
            .clone()
            .oneshot(request("POST", "/api/auth/register", None, Some(duplicate)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let short = json!({ "username": "ab", "password": "123", "role": "User" });
        let response = app
            .oneshot(request("POST", "/api/auth/register", None, Some(short)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn profile_requires_token_and_stored_account() {
        let (app, _) = make_test_app().await;

        let response = app
            .clone()
            .oneshot(request("GET", "/api/auth/profile", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(request("GET", "/api/auth/profile", Some("not-a-jwt"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let admin = token_for("admin", Role::Admin);
        let response = app
            .oneshot(request("GET", "/api/auth/profile", Some(&admin), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
