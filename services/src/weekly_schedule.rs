use crate::class_schedule::{ClassScheduleInput, ClassScheduleView, insert_class};
use crate::error::{ServiceError, ServiceResult};
use chrono::{Datelike, NaiveDate};
use db::models::{
    class_schedule, subject,
    weekly_schedule::{self, overloaded_day},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::{Expr, Value},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use util::validation::{validate_group_number, validate_not_blank};
use validator::Validate;

/// A class inside a weekly schedule. The group comes from the schedule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeeklyClassInput {
    pub subject_id: i64,
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 7, message = "Day of week must be between 1 and 7"))]
    pub day_of_week: Option<i32>,
    #[validate(range(min = 1, max = 7, message = "Pair number must be between 1 and 7"))]
    pub pair_number: i32,
    #[validate(
        length(max = 50, message = "Classroom must be at most 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub classroom: String,
    #[validate(
        length(max = 50, message = "Class type must be at most 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub class_type: String,
    #[validate(
        length(max = 200, message = "Teacher name must be at most 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub teacher_name: String,
}

impl WeeklyClassInput {
    fn day_of_week(&self) -> i32 {
        self.day_of_week
            .unwrap_or_else(|| self.date.weekday().number_from_monday() as i32)
    }

    fn into_class(self, group_number: &str) -> ClassScheduleInput {
        ClassScheduleInput {
            subject_id: self.subject_id,
            date: self.date,
            day_of_week: self.day_of_week,
            pair_number: self.pair_number,
            classroom: self.classroom,
            group_number: group_number.to_owned(),
            class_type: self.class_type,
            teacher_name: self.teacher_name,
            weekly_schedule_id: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeeklyScheduleInput {
    #[validate(custom(function = "validate_group_number"))]
    pub group_number: String,
    #[validate(range(min = 1, max = 53, message = "Week number must be between 1 and 53"))]
    pub week_number: i32,
    #[serde(default)]
    #[validate(nested)]
    pub classes: Vec<WeeklyClassInput>,
}

/// Omitting `classes` keeps the current ones.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeeklyScheduleUpdate {
    #[validate(custom(function = "validate_group_number"))]
    pub group_number: String,
    #[validate(range(min = 1, max = 53, message = "Week number must be between 1 and 53"))]
    pub week_number: i32,
    #[validate(nested)]
    pub classes: Option<Vec<WeeklyClassInput>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyScheduleView {
    pub id: i64,
    pub group_number: String,
    pub week_number: i32,
    pub classes: Vec<ClassScheduleView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleStatistics {
    pub total_classes: usize,
    pub class_types: BTreeMap<String, usize>,
    pub teachers_count: usize,
}

pub struct WeeklyScheduleService;

impl WeeklyScheduleService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<WeeklyScheduleView>> {
        let schedules = weekly_schedule::Entity::find()
            .order_by_asc(weekly_schedule::Column::GroupNumber)
            .order_by_asc(weekly_schedule::Column::WeekNumber)
            .all(db)
            .await?;

        let mut views = Vec::with_capacity(schedules.len());
        for schedule in schedules {
            views.push(view(db, schedule).await?);
        }
        Ok(views)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<WeeklyScheduleView> {
        let schedule = find(db, id).await?;
        view(db, schedule).await
    }

    pub async fn by_group_week(
        db: &DatabaseConnection,
        group_number: &str,
        week_number: i32,
    ) -> ServiceResult<WeeklyScheduleView> {
        let schedule = find_by_group_week(db, group_number, week_number)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "Weekly schedule for group {group_number} week {week_number} not found"
                ))
            })?;
        view(db, schedule).await
    }

    /// Creates the schedule and its classes in one transaction.
    pub async fn create(
        db: &DatabaseConnection,
        input: WeeklyScheduleInput,
    ) -> ServiceResult<WeeklyScheduleView> {
        input.validate()?;
        check_day_load(&input.classes)?;
        if find_by_group_week(db, &input.group_number, input.week_number)
            .await?
            .is_some()
        {
            return Err(duplicate(&input.group_number, input.week_number));
        }

        let txn = db.begin().await?;
        let schedule = weekly_schedule::ActiveModel {
            group_number: Set(input.group_number.clone()),
            week_number: Set(input.week_number),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        insert_classes(&txn, &schedule, input.classes).await?;
        txn.commit().await?;

        tracing::info!(
            schedule_id = schedule.id,
            group = %schedule.group_number,
            week = schedule.week_number,
            "Weekly schedule created"
        );
        Self::get(db, schedule.id).await
    }

    /// Replaces header fields and, when given, the full class list.
    pub async fn update(
        db: &DatabaseConnection,
        id: i64,
        input: WeeklyScheduleUpdate,
    ) -> ServiceResult<()> {
        input.validate()?;
        if let Some(classes) = &input.classes {
            check_day_load(classes)?;
        }
        let existing = find(db, id).await?;
        if let Some(other) = find_by_group_week(db, &input.group_number, input.week_number).await? {
            if other.id != id {
                return Err(duplicate(&input.group_number, input.week_number));
            }
        }

        let txn = db.begin().await?;
        let mut active: weekly_schedule::ActiveModel = existing.into();
        active.group_number = Set(input.group_number.clone());
        active.week_number = Set(input.week_number);
        let schedule = active.update(&txn).await?;

        match input.classes {
            Some(classes) => {
                class_schedule::Entity::delete_many()
                    .filter(class_schedule::Column::WeeklyScheduleId.eq(id))
                    .exec(&txn)
                    .await?;
                insert_classes(&txn, &schedule, classes).await?;
            }
            None => {
                class_schedule::Entity::update_many()
                    .col_expr(
                        class_schedule::Column::GroupNumber,
                        Expr::value(schedule.group_number.clone()),
                    )
                    .filter(class_schedule::Column::WeeklyScheduleId.eq(id))
                    .exec(&txn)
                    .await?;
            }
        }
        txn.commit().await?;
        Ok(())
    }

    /// Deletes the schedule. Its classes stay, detached.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> ServiceResult<()> {
        find(db, id).await?;

        let txn = db.begin().await?;
        class_schedule::Entity::update_many()
            .col_expr(
                class_schedule::Column::WeeklyScheduleId,
                Expr::value(Value::BigInt(None)),
            )
            .filter(class_schedule::Column::WeeklyScheduleId.eq(id))
            .exec(&txn)
            .await?;
        weekly_schedule::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Distinct teacher names in timetable order.
    pub async fn teachers(db: &DatabaseConnection, id: i64) -> ServiceResult<Vec<String>> {
        let schedule = find(db, id).await?;
        let mut seen = BTreeSet::new();
        Ok(schedule
            .classes(db)
            .await?
            .into_iter()
            .filter_map(|c| seen.insert(c.teacher_name.clone()).then_some(c.teacher_name))
            .collect())
    }

    pub async fn statistics(db: &DatabaseConnection, id: i64) -> ServiceResult<ScheduleStatistics> {
        let schedule = find(db, id).await?;
        let classes = schedule.classes(db).await?;

        let mut class_types = BTreeMap::new();
        for c in &classes {
            *class_types.entry(c.class_type.clone()).or_insert(0) += 1;
        }
        let teachers: BTreeSet<&str> = classes.iter().map(|c| c.teacher_name.as_str()).collect();

        Ok(ScheduleStatistics {
            total_classes: classes.len(),
            class_types,
            teachers_count: teachers.len(),
        })
    }

    pub async fn day(
        db: &DatabaseConnection,
        id: i64,
        day: i32,
    ) -> ServiceResult<Vec<ClassScheduleView>> {
        if !class_schedule::is_valid_day(day) {
            return Err(ServiceError::Validation(
                "Day of week must be between 1 and 7".into(),
            ));
        }
        find(db, id).await?;
        classes_of(db, id, Some(day)).await
    }
}

async fn find(db: &DatabaseConnection, id: i64) -> ServiceResult<weekly_schedule::Model> {
    weekly_schedule::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Weekly schedule", id))
}

async fn find_by_group_week(
    db: &DatabaseConnection,
    group_number: &str,
    week_number: i32,
) -> ServiceResult<Option<weekly_schedule::Model>> {
    Ok(weekly_schedule::Entity::find()
        .filter(weekly_schedule::Column::GroupNumber.eq(group_number))
        .filter(weekly_schedule::Column::WeekNumber.eq(week_number))
        .one(db)
        .await?)
}

fn duplicate(group_number: &str, week_number: i32) -> ServiceError {
    ServiceError::Conflict(format!(
        "Weekly schedule for group {group_number} week {week_number} already exists"
    ))
}

fn check_day_load(classes: &[WeeklyClassInput]) -> ServiceResult<()> {
    let days = classes.iter().map(WeeklyClassInput::day_of_week);
    match overloaded_day(days) {
        Some(day) => Err(ServiceError::Validation(format!(
            "{} has more than {} classes",
            class_schedule::day_name(day),
            weekly_schedule::MAX_CLASSES_PER_DAY
        ))),
        None => Ok(()),
    }
}

async fn insert_classes<C: ConnectionTrait>(
    conn: &C,
    schedule: &weekly_schedule::Model,
    classes: Vec<WeeklyClassInput>,
) -> ServiceResult<()> {
    for class in classes {
        insert_class(conn, &class.into_class(&schedule.group_number), Some(schedule.id)).await?;
    }
    Ok(())
}

async fn classes_of(
    db: &DatabaseConnection,
    schedule_id: i64,
    day: Option<i32>,
) -> ServiceResult<Vec<ClassScheduleView>> {
    let mut select = class_schedule::Entity::find()
        .filter(class_schedule::Column::WeeklyScheduleId.eq(schedule_id));
    if let Some(day) = day {
        select = select.filter(class_schedule::Column::DayOfWeek.eq(day));
    }
    Ok(select
        .order_by_asc(class_schedule::Column::DayOfWeek)
        .order_by_asc(class_schedule::Column::PairNumber)
        .find_also_related(subject::Entity)
        .all(db)
        .await?
        .into_iter()
        .map(|(c, s)| ClassScheduleView::new(c, s))
        .collect())
}

async fn view(
    db: &DatabaseConnection,
    schedule: weekly_schedule::Model,
) -> ServiceResult<WeeklyScheduleView> {
    let classes = classes_of(db, schedule.id, None).await?;
    Ok(WeeklyScheduleView {
        id: schedule.id,
        group_number: schedule.group_number,
        week_number: schedule.week_number,
        classes,
    })
}
