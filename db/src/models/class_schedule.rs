use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One class slot: a subject taught to a group in a classroom on a given date and pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "class_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub subject_id: i64,
    pub date: NaiveDate,
    /// ISO weekday, Monday = 1.
    pub day_of_week: i32,
    pub pair_number: i32,
    pub classroom: String,
    pub group_number: String,
    /// Stored lowercase.
    pub class_type: String,
    pub teacher_name: String,

    pub weekly_schedule_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_delete = "Restrict"
    )]
    Subject,

    #[sea_orm(
        belongs_to = "super::weekly_schedule::Entity",
        from = "Column::WeeklyScheduleId",
        to = "super::weekly_schedule::Column::Id",
        on_delete = "SetNull"
    )]
    WeeklySchedule,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::weekly_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeeklySchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn is_valid_day(day_of_week: i32) -> bool {
    (1..=7).contains(&day_of_week)
}

/// Start and end time of a numbered pair.
pub fn pair_time(pair_number: i32) -> &'static str {
    match pair_number {
        1 => "08:30 - 10:00",
        2 => "10:15 - 11:45",
        3 => "12:00 - 13:30",
        4 => "14:00 - 15:30",
        5 => "15:45 - 17:15",
        6 => "17:30 - 18:45",
        7 => "19:00 - 20:30",
        _ => "Time not defined",
    }
}

pub fn day_name(day_of_week: i32) -> &'static str {
    match day_of_week {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        7 => "Sunday",
        _ => "Unknown",
    }
}
