use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A cohort of students sharing a schedule, identified by a number like `АС-22-04`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(unique)]
    pub group_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Students,

    #[sea_orm(has_many = "super::teacher_group::Entity")]
    TeacherGroups,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::teacher_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherGroups.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_group::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_group::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, group_number: &str) -> Result<Model, DbErr> {
        ActiveModel {
            group_number: Set(group_number.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_number(db: &DbConn, group_number: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::GroupNumber.eq(group_number))
            .one(db)
            .await
    }
}
