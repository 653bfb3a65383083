use db::models::user::Role;
use serde::{Deserialize, Serialize};
use services::auth::Caller;

/// JWT payload. `sub` is the username the token was issued to.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iss: String,
    pub aud: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn caller(&self) -> Caller {
        Caller {
            username: self.0.sub.clone(),
            role: self.0.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == Role::Admin
    }
}
