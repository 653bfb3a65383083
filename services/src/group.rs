use crate::error::{ServiceError, ServiceResult};
use db::models::{group, student, teacher_group};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use util::validation::validate_group_number;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GroupInput {
    #[validate(custom(function = "validate_group_number"))]
    pub group_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    pub id: i64,
    pub group_number: String,
    pub students_count: u64,
    pub teachers_count: u64,
}

pub struct GroupService;

impl GroupService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<GroupView>> {
        let groups = group::Entity::find()
            .order_by_asc(group::Column::GroupNumber)
            .all(db)
            .await?;

        let mut views = Vec::with_capacity(groups.len());
        for g in groups {
            views.push(Self::view(db, g).await?);
        }
        Ok(views)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<GroupView> {
        let g = group::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", id))?;
        Self::view(db, g).await
    }

    /// Looks a group up by its number, e.g. `АС-22-04`.
    pub async fn find_by_number(
        db: &DatabaseConnection,
        group_number: &str,
    ) -> ServiceResult<group::Model> {
        group::Model::find_by_number(db, group_number)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Group {group_number} not found")))
    }

    pub async fn create(db: &DatabaseConnection, input: GroupInput) -> ServiceResult<GroupView> {
        input.validate()?;

        let created = group::Model::create(db, &input.group_number)
            .await
            .map_err(|e| {
                ServiceError::conflict_on_unique(
                    e,
                    &format!("Group {} already exists", input.group_number),
                )
            })?;
        Self::view(db, created).await
    }

    /// Groups with students cannot be removed.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> ServiceResult<()> {
        group::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", id))?;

        let students = student::Entity::find()
            .filter(student::Column::GroupId.eq(id))
            .count(db)
            .await?;
        if students > 0 {
            return Err(ServiceError::Conflict(format!(
                "Group {id} still has {students} student(s)"
            )));
        }

        group::Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    async fn view(db: &DatabaseConnection, g: group::Model) -> ServiceResult<GroupView> {
        let students_count = student::Entity::find()
            .filter(student::Column::GroupId.eq(g.id))
            .count(db)
            .await?;
        let teachers_count = teacher_group::Entity::find()
            .filter(teacher_group::Column::GroupId.eq(g.id))
            .count(db)
            .await?;

        Ok(GroupView {
            id: g.id,
            group_number: g.group_number,
            students_count,
            teachers_count,
        })
    }
}
