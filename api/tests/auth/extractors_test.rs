#[cfg(test)]
mod tests {
    use crate::helpers::app::TEST_JWT_SECRET;
    use api::auth::claims::{AuthUser, Claims};
    use axum::{
        extract::FromRequestParts,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use db::models::user::Role;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serial_test::serial;
    use util::config::{self, AppConfig};

    fn claims(exp_offset_secs: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: "kate".into(),
            role: Role::Student,
            iss: config::jwt_issuer(),
            aud: config::jwt_audience(),
            iat: now as usize,
            exp: (now + exp_offset_secs) as usize,
        }
    }

    fn generate_token(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    async fn extract(header: Option<String>) -> Result<AuthUser, (StatusCode, &'static str)> {
        let mut builder = Request::builder();
        if let Some(value) = header {
            builder = builder.header("Authorization", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        AuthUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    #[serial]
    async fn test_valid_token() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let token = generate_token(&claims(3600), TEST_JWT_SECRET);

        let user = extract(Some(format!("Bearer {token}"))).await.unwrap();
        assert_eq!(user.0.sub, "kate");
        assert_eq!(user.0.role, Role::Student);
        assert!(!user.is_admin());
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_token_wrong_secret() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let token = generate_token(&claims(3600), "wrong_secret");

        let (status, message) = extract(Some(format!("Bearer {token}"))).await.unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Invalid or expired token");
    }

    #[tokio::test]
    #[serial]
    async fn test_expired_token() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let token = generate_token(&claims(-3600), TEST_JWT_SECRET);

        let (status, message) = extract(Some(format!("Bearer {token}"))).await.unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Invalid or expired token");
    }

    #[tokio::test]
    #[serial]
    async fn test_wrong_audience() {
        AppConfig::set_jwt_secret(TEST_JWT_SECRET);
        let mut foreign = claims(3600);
        foreign.aud = "someone-else".into();
        let token = generate_token(&foreign, TEST_JWT_SECRET);

        let (status, _) = extract(Some(format!("Bearer {token}"))).await.unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_missing_authorization_header() {
        let (status, message) = extract(None).await.unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Missing or invalid Authorization header");
    }

    #[tokio::test]
    async fn test_malformed_authorization_header() {
        let (status, message) = extract(Some("Bearer".into())).await.unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message, "Missing or invalid Authorization header");
    }
}
