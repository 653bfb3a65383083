use crate::seed::Seeder;
use db::models::user::Role;
use fake::{Fake, faker::lorem::en::Sentence};
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    auth::Caller,
    rating::{CreateRating, RatingService},
    student::StudentService,
    teacher::TeacherService,
};

pub struct RatingSeeder;

#[async_trait::async_trait]
impl Seeder for RatingSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let admin = Caller {
            username: "seeder".into(),
            role: Role::Admin,
        };
        let teachers = TeacherService::list(db).await?;

        for student in StudentService::list(db).await? {
            for teacher in &teachers {
                let check = StudentService::can_rate(db, student.id, teacher.id).await?;
                // Leave roughly a third of the pairs unrated
                if !check.can_rate || fastrand::u8(0..3) == 0 {
                    continue;
                }

                let review = fastrand::bool().then(|| Sentence(4..10).fake::<String>());
                RatingService::create(
                    db,
                    &admin,
                    CreateRating {
                        teacher_id: teacher.id,
                        student_id: Some(student.id),
                        score: fastrand::i32(1..=5),
                        review,
                        is_anonymous: fastrand::u8(0..4) == 0,
                    },
                )
                .await?;
            }
        }
        Ok(())
    }
}
