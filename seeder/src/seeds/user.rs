use crate::seed::Seeder;
use db::models::user::{Model, Role};
use sea_orm::DatabaseConnection;
use services::{ServiceError, student::StudentService};

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        // Fixed plain user and teacher account
        let _ = Model::create(db, "viewer", "password123", Role::User, None, None).await;
        let _ = Model::create(db, "tupysev", "password123", Role::Teacher, None, Some(2)).await;

        // One account per student, `student<id>`
        for s in StudentService::list(db).await? {
            let username = format!("student{}", s.id);
            let _ = Model::create(db, &username, "password123", Role::Student, Some(s.id), None).await;
        }
        Ok(())
    }
}
