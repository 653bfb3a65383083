use crate::seed::Seeder;
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    subject::{SubjectInput, SubjectService},
};

pub const SUBJECTS: [&str; 6] = [
    "Базы данных",
    "Компьютерные сети",
    "Операционные системы",
    "Теория алгоритмов",
    "Программная инженерия",
    "Информационная безопасность",
];

pub struct SubjectSeeder;

#[async_trait::async_trait]
impl Seeder for SubjectSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let existing: Vec<String> = SubjectService::list(db)
            .await?
            .into_iter()
            .map(|s| s.name)
            .collect();

        for name in SUBJECTS.iter().filter(|n| !existing.iter().any(|e| e == *n)) {
            SubjectService::create(db, SubjectInput { name: name.to_string() }).await?;
        }
        Ok(())
    }
}
