use crate::error::{ServiceError, ServiceResult};
use chrono::{Datelike, NaiveDate};
use db::models::{
    class_schedule::{self, day_name, pair_time},
    subject,
    weekly_schedule::{self, MAX_CLASSES_PER_DAY},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use serde::{Deserialize, Serialize};
use util::validation::{is_valid_group_number, validate_group_number, validate_not_blank};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClassScheduleInput {
    pub subject_id: i64,
    pub date: NaiveDate,
    /// Derived from `date` when omitted.
    #[validate(range(min = 1, max = 7, message = "Day of week must be between 1 and 7"))]
    pub day_of_week: Option<i32>,
    #[validate(range(min = 1, max = 7, message = "Pair number must be between 1 and 7"))]
    pub pair_number: i32,
    #[validate(
        length(max = 50, message = "Classroom must be at most 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub classroom: String,
    #[validate(custom(function = "validate_group_number"))]
    pub group_number: String,
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
    pub weekly_schedule_id: Option<i64>,
}

impl ClassScheduleInput {
    pub fn day_of_week(&self) -> i32 {
        self.day_of_week
            .unwrap_or_else(|| self.date.weekday().number_from_monday() as i32)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassScheduleView {
    pub id: i64,
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub date: NaiveDate,
    pub day_of_week: i32,
    pub day_name: String,
    pub pair_number: i32,
    pub pair_time: String,
    pub classroom: String,
    pub group_number: String,
    pub class_type: String,
    pub teacher_name: String,
    pub weekly_schedule_id: Option<i64>,
}

impl ClassScheduleView {
    pub fn new(c: class_schedule::Model, s: Option<subject::Model>) -> Self {
        Self {
            id: c.id,
            subject_id: c.subject_id,
            subject_name: s.map(|s| s.name),
            date: c.date,
            day_of_week: c.day_of_week,
            day_name: day_name(c.day_of_week).to_string(),
            pair_number: c.pair_number,
            pair_time: pair_time(c.pair_number).to_string(),
            classroom: c.classroom,
            group_number: c.group_number,
            class_type: c.class_type,
            teacher_name: c.teacher_name,
            weekly_schedule_id: c.weekly_schedule_id,
        }
    }
}

/// Display-ready row for timetables.
#[derive(Debug, Clone, Serialize)]
pub struct ClassWithSubjectInfo {
    pub id: i64,
    pub date: String,
    pub day: String,
    pub time: String,
    pub subject_name: String,
    pub classroom: String,
    pub group_number: String,
    pub class_type: String,
    pub teacher_name: String,
}

pub struct ClassScheduleService;

impl ClassScheduleService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<ClassScheduleView>> {
        load(db, chronological(class_schedule::Entity::find())).await
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<ClassScheduleView> {
        let (c, s) = class_schedule::Entity::find_by_id(id)
            .find_also_related(subject::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Class schedule", id))?;
        Ok(ClassScheduleView::new(c, s))
    }

    pub async fn create(
        db: &DatabaseConnection,
        input: ClassScheduleInput,
    ) -> ServiceResult<ClassScheduleView> {
        input.validate()?;
        check_weekly_slot(db, &input, None).await?;

        let created = insert_class(db, &input, input.weekly_schedule_id).await?;
        Self::get(db, created.id).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i64,
        input: ClassScheduleInput,
    ) -> ServiceResult<()> {
        input.validate()?;
        let existing = class_schedule::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Class schedule", id))?;
        ensure_subject(db, input.subject_id).await?;
        check_weekly_slot(db, &input, Some(id)).await?;

        let mut active: class_schedule::ActiveModel = existing.into();
        apply(&mut active, &input, input.weekly_schedule_id);
        active.update(db).await?;
        Ok(())
    }

    pub async fn delete(db: &DatabaseConnection, id: i64) -> ServiceResult<()> {
        let result = class_schedule::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Class schedule", id));
        }
        Ok(())
    }

    /// Classes of a group ordered by date, then pair.
    pub async fn by_group(
        db: &DatabaseConnection,
        group_number: &str,
    ) -> ServiceResult<Vec<ClassScheduleView>> {
        ensure_group_format(group_number)?;
        load(
            db,
            chronological(
                class_schedule::Entity::find()
                    .filter(class_schedule::Column::GroupNumber.eq(group_number)),
            ),
        )
        .await
    }

    /// Classes whose teacher name contains `name`.
    pub async fn by_teacher(
        db: &DatabaseConnection,
        name: &str,
    ) -> ServiceResult<Vec<ClassScheduleView>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Validation("Teacher name must not be blank".into()));
        }
        load(
            db,
            chronological(
                class_schedule::Entity::find()
                    .filter(class_schedule::Column::TeacherName.contains(name)),
            ),
        )
        .await
    }

    pub async fn by_date(db: &DatabaseConnection, date: &str) -> ServiceResult<Vec<ClassScheduleView>> {
        let date = parse_date(date)?;
        load(
            db,
            class_schedule::Entity::find()
                .filter(class_schedule::Column::Date.eq(date))
                .order_by_asc(class_schedule::Column::PairNumber)
                .order_by_asc(class_schedule::Column::GroupNumber),
        )
        .await
    }

    /// Case-insensitive match on class type.
    pub async fn by_type(
        db: &DatabaseConnection,
        class_type: &str,
    ) -> ServiceResult<Vec<ClassScheduleView>> {
        load(
            db,
            chronological(
                class_schedule::Entity::find().filter(
                    class_schedule::Column::ClassType.eq(class_type.trim().to_lowercase()),
                ),
            ),
        )
        .await
    }

    /// Distinct classrooms in use on `date`, sorted.
    pub async fn classrooms(db: &DatabaseConnection, date: &str) -> ServiceResult<Vec<String>> {
        let date = parse_date(date)?;
        Ok(class_schedule::Entity::find()
            .select_only()
            .column(class_schedule::Column::Classroom)
            .distinct()
            .filter(class_schedule::Column::Date.eq(date))
            .order_by_asc(class_schedule::Column::Classroom)
            .into_tuple::<String>()
            .all(db)
            .await?)
    }

    pub async fn with_subject_info(db: &DatabaseConnection) -> ServiceResult<Vec<ClassWithSubjectInfo>> {
        Ok(Self::list(db)
            .await?
            .into_iter()
            .map(|v| ClassWithSubjectInfo {
                id: v.id,
                date: v.date.format("%Y-%m-%d").to_string(),
                day: v.day_name,
                time: v.pair_time,
                subject_name: v.subject_name.unwrap_or_default(),
                classroom: v.classroom,
                group_number: v.group_number,
                class_type: v.class_type,
                teacher_name: v.teacher_name,
            })
            .collect())
    }
}

/// Inserts one class after checking that its subject exists.
pub(crate) async fn insert_class<C: ConnectionTrait>(
    conn: &C,
    input: &ClassScheduleInput,
    weekly_schedule_id: Option<i64>,
) -> ServiceResult<class_schedule::Model> {
    ensure_subject(conn, input.subject_id).await?;

    let mut active = class_schedule::ActiveModel {
        ..Default::default()
    };
    apply(&mut active, input, weekly_schedule_id);
    Ok(active.insert(conn).await?)
}

fn apply(
    active: &mut class_schedule::ActiveModel,
    input: &ClassScheduleInput,
    weekly_schedule_id: Option<i64>,
) {
    active.subject_id = Set(input.subject_id);
    active.date = Set(input.date);
    active.day_of_week = Set(input.day_of_week());
    active.pair_number = Set(input.pair_number);
    active.classroom = Set(input.classroom.trim().to_owned());
    active.group_number = Set(input.group_number.clone());
    active.class_type = Set(input.class_type.trim().to_lowercase());
    active.teacher_name = Set(input.teacher_name.trim().to_owned());
    active.weekly_schedule_id = Set(weekly_schedule_id);
}

async fn ensure_subject<C: ConnectionTrait>(conn: &C, subject_id: i64) -> ServiceResult<()> {
    match subject::Entity::find_by_id(subject_id).one(conn).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::Validation(format!(
            "Subject {subject_id} does not exist"
        ))),
    }
}

/// A class attached to a weekly schedule must belong to the schedule's group
/// and must not push its day past the daily limit.
async fn check_weekly_slot(
    db: &DatabaseConnection,
    input: &ClassScheduleInput,
    existing_id: Option<i64>,
) -> ServiceResult<()> {
    let Some(schedule_id) = input.weekly_schedule_id else {
        return Ok(());
    };

    let schedule = weekly_schedule::Entity::find_by_id(schedule_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            ServiceError::Validation(format!("Weekly schedule {schedule_id} does not exist"))
        })?;
    if schedule.group_number != input.group_number {
        return Err(ServiceError::Validation(format!(
            "Weekly schedule {schedule_id} belongs to group {}",
            schedule.group_number
        )));
    }

    let mut same_day = class_schedule::Entity::find()
        .filter(class_schedule::Column::WeeklyScheduleId.eq(schedule_id))
        .filter(class_schedule::Column::DayOfWeek.eq(input.day_of_week()));
    if let Some(id) = existing_id {
        same_day = same_day.filter(class_schedule::Column::Id.ne(id));
    }
    if same_day.count(db).await? as usize >= MAX_CLASSES_PER_DAY {
        return Err(ServiceError::Validation(format!(
            "A weekly schedule allows at most {MAX_CLASSES_PER_DAY} classes per day"
        )));
    }
    Ok(())
}

pub(crate) fn parse_date(raw: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ServiceError::Validation("Date must be formatted as YYYY-MM-DD".into()))
}

fn ensure_group_format(group_number: &str) -> ServiceResult<()> {
    if is_valid_group_number(group_number) {
        Ok(())
    } else {
        Err(ServiceError::Validation(
            "Group number must look like АС-22-04".into(),
        ))
    }
}

fn chronological(select: Select<class_schedule::Entity>) -> Select<class_schedule::Entity> {
    select
        .order_by_asc(class_schedule::Column::Date)
        .order_by_asc(class_schedule::Column::PairNumber)
}

async fn load(
    db: &DatabaseConnection,
    select: Select<class_schedule::Entity>,
) -> ServiceResult<Vec<ClassScheduleView>> {
    Ok(select
        .find_also_related(subject::Entity)
        .all(db)
        .await?
        .into_iter()
        .map(|(c, s)| ClassScheduleView::new(c, s))
        .collect())
}
