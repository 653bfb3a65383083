use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rating::Entity")]
    Ratings,

    #[sea_orm(has_many = "super::teacher_group::Entity")]
    TeacherGroups,

    #[sea_orm(has_many = "super::student_teacher::Entity")]
    StudentTeachers,
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl Related<super::teacher_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherGroups.def()
    }
}

impl Related<super::student_teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentTeachers.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_group::Relation::Teacher.def().rev())
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_teacher::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_teacher::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn full_name(&self) -> String {
        super::full_name(&self.last_name, &self.first_name, self.middle_name.as_deref())
    }

    pub async fn create(
        db: &DbConn,
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            middle_name: Set(middle_name.map(str::to_owned)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Teachers linked to the group through `teacher_groups`, ordered by id.
    pub async fn find_by_group(db: &DbConn, group_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .inner_join(super::teacher_group::Entity)
            .filter(super::teacher_group::Column::GroupId.eq(group_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}
