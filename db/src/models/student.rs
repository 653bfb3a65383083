use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,

    pub group_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id",
        on_delete = "Restrict"
    )]
    Group,

    #[sea_orm(has_many = "super::rating::Entity")]
    Ratings,

    #[sea_orm(has_many = "super::student_teacher::Entity")]
    StudentTeachers,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::student_teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTeachers.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_teacher::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_teacher::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn full_name(&self) -> String {
        super::full_name(&self.last_name, &self.first_name, self.middle_name.as_deref())
    }

    pub fn short_name(&self) -> String {
        super::short_name(&self.last_name, &self.first_name)
    }

    pub async fn create(
        db: &DbConn,
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
        group_id: i64,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            middle_name: Set(middle_name.map(str::to_owned)),
            group_id: Set(group_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_group(db: &DbConn, group_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::GroupId.eq(group_id))
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(db)
            .await
    }
}
