#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, app::TEST_JWT_SECRET, request, token_for};
    use api::auth::{
        claims::AuthUser,
        guards::{allow_admin, allow_admin_or_student, allow_authenticated},
    };
    use axum::{Extension, Router, http::StatusCode, middleware, routing::get};
    use db::models::user::Role;
    use serial_test::serial;
    use tower::ServiceExt;
    use util::config::AppConfig;

    async fn whoami(Extension(user): Extension<AuthUser>) -> String {
        user.0.sub
    }

    fn guarded_app() -> Router {
        Router::new()
            .route(
                "/any",
                get(whoami).route_layer(middleware::from_fn(allow_authenticated)),
            )
            .route(
                "/admin",
                get(whoami).route_layer(middleware::from_fn(allow_admin)),
            )
            .route(
                "/rate",
                get(whoami).route_layer(middleware::from_fn(allow_admin_or_student)),
            )
    }

    async fn status_for(uri: &str, token: Option<&str>) -> StatusCode {
        guarded_app()
            .oneshot(request("GET", uri, token, None))
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    #[serial]
    async fn missing_token_is_unauthorized_everywhere() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        for uri in ["/any", "/admin", "/rate"] {
            assert_eq!(status_for(uri, None).await, StatusCode::UNAUTHORIZED);
        }

        let response = guarded_app()
            .oneshot(request("GET", "/admin", None, None))
            .await
            .unwrap();
        let json = json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Authentication required");
    }

    #[tokio::test]
    #[serial]
    async fn roles_are_enforced() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let admin = token_for("admin", Role::Admin);
        let student = token_for("kate", Role::Student);
        let user = token_for("viewer", Role::User);
        let teacher = token_for("tupysev", Role::Teacher);

        let cases = [
            ("/any", &user, StatusCode::OK),
            ("/any", &teacher, StatusCode::OK),
            ("/admin", &admin, StatusCode::OK),
            ("/admin", &student, StatusCode::FORBIDDEN),
            ("/admin", &user, StatusCode::FORBIDDEN),
            ("/rate", &admin, StatusCode::OK),
            ("/rate", &student, StatusCode::OK),
            ("/rate", &user, StatusCode::FORBIDDEN),
            ("/rate", &teacher, StatusCode::FORBIDDEN),
        ];
        for (uri, token, expected) in cases {
            assert_eq!(status_for(uri, Some(token)).await, expected, "{uri}");
        }
    }

    #[tokio::test]
    #[serial]
    async fn guard_inserts_the_caller() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let token = token_for("kate", Role::Student);

        let response = guarded_app()
            .oneshot(request("GET", "/any", Some(&token), None))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"kate");
    }
}
