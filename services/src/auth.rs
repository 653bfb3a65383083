use crate::error::{ServiceError, ServiceResult};
use crate::views::{StudentBrief, TeacherBrief, group_numbers};
use chrono::{DateTime, Utc};
use db::models::{
    student, teacher,
    user::{self, Role},
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Built-in accounts accepted when no database user carries the name.
const BUILT_IN_ACCOUNTS: [(&str, &str, Role); 2] = [
    ("admin", "admin123", Role::Admin),
    ("user", "user123", Role::User),
];

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: String,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

/// Identity established by a successful login or registration.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: Role,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

impl From<user::Model> for AuthenticatedUser {
    fn from(u: user::Model) -> Self {
        Self {
            username: u.username,
            role: u.role,
            student_id: u.student_id,
            teacher_id: u.teacher_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub student: Option<StudentBrief>,
    pub teacher: Option<TeacherBrief>,
}

/// The authenticated principal behind a request, as carried by its token.
#[derive(Debug, Clone)]
pub struct Caller {
    pub username: String,
    pub role: Role,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The student linked to the caller's account, if any.
    pub async fn student_id(&self, db: &DatabaseConnection) -> ServiceResult<Option<i64>> {
        Ok(user::Model::find_by_username(db, &self.username)
            .await?
            .and_then(|u| u.student_id))
    }

    /// Anonymous ratings are visible to administrators and to their author.
    pub async fn sees_anonymous_of(
        &self,
        db: &DatabaseConnection,
        student_id: i64,
    ) -> ServiceResult<bool> {
        if self.is_admin() {
            return Ok(true);
        }
        Ok(self.role == Role::Student && self.student_id(db).await? == Some(student_id))
    }
}

pub struct AuthService;

impl AuthService {
    /// Checks credentials against the users table, falling back to the
    /// built-in accounts only when no row carries the username.
    pub async fn login(
        db: &DatabaseConnection,
        req: LoginRequest,
    ) -> ServiceResult<AuthenticatedUser> {
        req.validate()?;
        let username = req.username.trim();

        if let Some(found) = user::Model::find_by_username(db, username).await? {
            return if found.verify_password(&req.password) {
                Ok(found.into())
            } else {
                Err(invalid_credentials())
            };
        }

        BUILT_IN_ACCOUNTS
            .iter()
            .find(|(name, password, _)| *name == username && *password == req.password)
            .map(|(name, _, role)| AuthenticatedUser {
                username: name.to_string(),
                role: *role,
                student_id: None,
                teacher_id: None,
            })
            .ok_or_else(invalid_credentials)
    }

    pub async fn register(
        db: &DatabaseConnection,
        req: RegisterRequest,
    ) -> ServiceResult<AuthenticatedUser> {
        req.validate()?;
        let username = req.username.trim();

        let role = Role::from_str(req.role.trim()).map_err(|_| {
            ServiceError::Validation("Role must be one of Admin, User, Student, Teacher".into())
        })?;

        let (student_id, teacher_id) = match role {
            Role::Admin => {
                return Err(ServiceError::Validation(
                    "Administrator accounts cannot be self-registered".into(),
                ));
            }
            Role::User => (None, None),
            Role::Student => {
                let id = req.student_id.ok_or_else(|| {
                    ServiceError::Validation("student_id is required for the Student role".into())
                })?;
                if student::Entity::find_by_id(id).one(db).await?.is_none() {
                    return Err(ServiceError::Validation(format!("Student {id} does not exist")));
                }
                (Some(id), None)
            }
            Role::Teacher => {
                let id = req.teacher_id.ok_or_else(|| {
                    ServiceError::Validation("teacher_id is required for the Teacher role".into())
                })?;
                if teacher::Entity::find_by_id(id).one(db).await?.is_none() {
                    return Err(ServiceError::Validation(format!("Teacher {id} does not exist")));
                }
                (None, Some(id))
            }
        };

        let taken = BUILT_IN_ACCOUNTS.iter().any(|(name, _, _)| *name == username)
            || user::Model::find_by_username(db, username).await?.is_some();
        if taken {
            return Err(ServiceError::Conflict("Username is already taken".into()));
        }

        let created =
            user::Model::create(db, username, &req.password, role, student_id, teacher_id)
                .await
                .map_err(|e| ServiceError::conflict_on_unique(e, "Username is already taken"))?;

        tracing::info!(username = %created.username, role = %created.role, "Registered user");
        Ok(created.into())
    }

    pub async fn profile(db: &DatabaseConnection, username: &str) -> ServiceResult<Profile> {
        let found = user::Model::find_by_username(db, username)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User profile not found".into()))?;

        let student = match found.student_id {
            Some(id) => {
                let groups = group_numbers(db).await?;
                student::Entity::find_by_id(id)
                    .one(db)
                    .await?
                    .map(|s| StudentBrief::new(&s, &groups))
            }
            None => None,
        };
        let teacher = match found.teacher_id {
            Some(id) => teacher::Entity::find_by_id(id)
                .one(db)
                .await?
                .map(|t| TeacherBrief::from(&t)),
            None => None,
        };

        Ok(Profile {
            id: found.id,
            username: found.username,
            role: found.role,
            created_at: found.created_at,
            student,
            teacher,
        })
    }
}

fn invalid_credentials() -> ServiceError {
    ServiceError::Unauthorized("Invalid username or password".into())
}
