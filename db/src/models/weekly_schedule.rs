use sea_orm::ActiveValue::Set;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_CLASSES_PER_DAY: usize = 7;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "weekly_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub group_number: String,
    pub week_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_schedule::Entity")]
    Classes,
}

impl Related<super::class_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, group_number: &str, week_number: i32) -> Result<Model, DbErr> {
        ActiveModel {
            group_number: Set(group_number.to_owned()),
            week_number: Set(week_number),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Classes of this schedule ordered by day, then pair.
    pub async fn classes(&self, db: &DbConn) -> Result<Vec<super::class_schedule::Model>, DbErr> {
        use super::class_schedule::{Column, Entity};

        Entity::find()
            .filter(Column::WeeklyScheduleId.eq(self.id))
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::PairNumber)
            .all(db)
            .await
    }
}

/// Returns the first day holding more than `MAX_CLASSES_PER_DAY` classes.
pub fn overloaded_day(days: impl IntoIterator<Item = i32>) -> Option<i32> {
    let mut per_day: BTreeMap<i32, usize> = BTreeMap::new();
    for day in days {
        *per_day.entry(day).or_default() += 1;
    }
    per_day
        .into_iter()
        .find(|(_, count)| *count > MAX_CLASSES_PER_DAY)
        .map(|(day, _)| day)
}
