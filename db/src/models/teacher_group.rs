use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Links a teacher to a group they teach. A teacher may rate-qualify every
/// student of the groups listed here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "teacher_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub teacher_id: i64,
    pub group_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_delete = "Cascade"
    )]
    Teacher,

    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id",
        on_delete = "Cascade"
    )]
    Group,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, teacher_id: i64, group_id: i64) -> Result<Model, DbErr> {
        ActiveModel {
            teacher_id: Set(teacher_id),
            group_id: Set(group_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_link(
        db: &DbConn,
        teacher_id: i64,
        group_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::GroupId.eq(group_id))
            .one(db)
            .await
    }
}
