pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use db::models::user::Role;
use jsonwebtoken::{EncodingKey, Header, encode};
use util::config;

/// Generates a JWT and its expiry timestamp (RFC 3339) for a given user.
pub fn generate_jwt(
    username: &str,
    role: Role,
) -> Result<(String, String), jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expiry = now + Duration::minutes(config::jwt_duration_minutes() as i64);

    let claims = Claims {
        sub: username.to_owned(),
        role,
        iss: config::jwt_issuer(),
        aud: config::jwt_audience(),
        iat: now.timestamp() as usize,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )?;

    Ok((token, expiry.to_rfc3339()))
}
