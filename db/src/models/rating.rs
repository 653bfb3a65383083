use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;
pub const MAX_REVIEW_CHARS: usize = 1000;

/// A 1..=5 score a student gives a teacher. One row per (student, teacher).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub score: i32,
    pub review: Option<String>,
    pub is_anonymous: bool,
    pub created_date: DateTime<Utc>,

    pub student_id: i64,
    pub teacher_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_delete = "Cascade"
    )]
    Teacher,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        student_id: i64,
        teacher_id: i64,
        score: i32,
        review: Option<&str>,
        is_anonymous: bool,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id),
            teacher_id: Set(teacher_id),
            score: Set(score),
            review: Set(review.map(str::to_owned)),
            is_anonymous: Set(is_anonymous),
            created_date: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_for_pair(
        db: &DbConn,
        student_id: i64,
        teacher_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .one(db)
            .await
    }

    pub async fn find_by_teacher(db: &DbConn, teacher_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedDate)
            .all(db)
            .await
    }

    pub fn stars_display(&self) -> String {
        stars_display(self.score)
    }
}

/// Arithmetic mean of the scores, `0.0` when there are none.
pub fn average_score(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64
}

/// `score` filled stars followed by empty ones, e.g. `★★★☆☆`.
pub fn stars_display(score: i32) -> String {
    let filled = score.clamp(0, MAX_SCORE) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_SCORE as usize - filled)
    )
}
