use crate::error::{ServiceError, ServiceResult};
use db::models::{class_schedule, subject};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_subject_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if (3..=100).contains(&len) {
        Ok(())
    } else {
        let mut err = ValidationError::new("name");
        err.message = Some("Subject name must be between 3 and 100 characters".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubjectInput {
    #[validate(custom(function = "validate_subject_name"))]
    pub name: String,
}

pub struct SubjectService;

impl SubjectService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<subject::Model>> {
        Ok(subject::Entity::find()
            .order_by_asc(subject::Column::Name)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<subject::Model> {
        subject::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Subject", id))
    }

    pub async fn create(db: &DatabaseConnection, input: SubjectInput) -> ServiceResult<subject::Model> {
        input.validate()?;
        Ok(subject::Model::create(db, input.name.trim()).await?)
    }

    pub async fn update(db: &DatabaseConnection, id: i64, input: SubjectInput) -> ServiceResult<()> {
        input.validate()?;
        let existing = Self::get(db, id).await?;

        let mut active: subject::ActiveModel = existing.into();
        active.name = Set(input.name.trim().to_owned());
        active.update(db).await?;
        Ok(())
    }

    /// Subjects still scheduled in a class cannot be removed.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> ServiceResult<()> {
        Self::get(db, id).await?;

        let in_use = class_schedule::Entity::find()
            .filter(class_schedule::Column::SubjectId.eq(id))
            .count(db)
            .await?;
        if in_use > 0 {
            return Err(ServiceError::Conflict(format!(
                "Subject {id} is used by {in_use} scheduled class(es)"
            )));
        }

        subject::Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
