use crate::auth::Caller;
use crate::error::{ServiceError, ServiceResult};
use crate::student::{StudentService, teacher_ids_for};
use crate::teacher::TeacherService;
use crate::views::{
    StudentBrief, TeacherBrief, group_numbers, reviewer_name, students_by_id, teachers_by_id,
};
use chrono::{DateTime, Utc};
use db::models::{
    rating::{self, MAX_REVIEW_CHARS},
    student, teacher,
    user::Role,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError};

pub const MAX_RECENT_COUNT: u64 = 100;

fn validate_review(review: &str) -> Result<(), ValidationError> {
    if review.chars().count() > MAX_REVIEW_CHARS {
        let mut err = ValidationError::new("review");
        err.message = Some("Review must be at most 1000 characters".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRating {
    pub teacher_id: i64,
    /// Required for administrators. Students always rate as themselves.
    pub student_id: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i32,
    #[validate(custom(function = "validate_review"))]
    pub review: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRating {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i32,
    #[validate(custom(function = "validate_review"))]
    pub review: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// A rating with its teacher and, unless anonymous, its author.
#[derive(Debug, Clone, Serialize)]
pub struct RatingView {
    pub id: i64,
    pub score: i32,
    pub stars: String,
    pub review: Option<String>,
    pub is_anonymous: bool,
    pub reviewer_name: String,
    pub created_date: DateTime<Utc>,
    pub teacher: Option<TeacherBrief>,
    pub student: Option<StudentBrief>,
}

/// Flat projection used by the `with-details` listing.
#[derive(Debug, Clone, Serialize)]
pub struct RatingDetails {
    pub id: i64,
    pub score: i32,
    pub review: Option<String>,
    pub is_anonymous: bool,
    pub created_date: DateTime<Utc>,
    pub teacher_name: String,
    pub student_name: Option<String>,
    pub group_number: Option<String>,
}

struct Lookup {
    teachers: HashMap<i64, teacher::Model>,
    students: HashMap<i64, student::Model>,
    groups: HashMap<i64, String>,
}

impl Lookup {
    async fn load(db: &DatabaseConnection) -> ServiceResult<Self> {
        Ok(Self {
            teachers: teachers_by_id(db).await?,
            students: students_by_id(db).await?,
            groups: group_numbers(db).await?,
        })
    }

    fn view(&self, r: &rating::Model) -> RatingView {
        let author = self.students.get(&r.student_id);
        RatingView {
            id: r.id,
            score: r.score,
            stars: r.stars_display(),
            review: r.review.clone(),
            is_anonymous: r.is_anonymous,
            reviewer_name: reviewer_name(r, author),
            created_date: r.created_date,
            teacher: self.teachers.get(&r.teacher_id).map(TeacherBrief::from),
            student: author
                .filter(|_| !r.is_anonymous)
                .map(|s| StudentBrief::new(s, &self.groups)),
        }
    }

    fn views(&self, ratings: &[rating::Model]) -> Vec<RatingView> {
        ratings.iter().map(|r| self.view(r)).collect()
    }
}

pub struct RatingService;

impl RatingService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<RatingView>> {
        let ratings = rating::Entity::find()
            .order_by_desc(rating::Column::CreatedDate)
            .order_by_desc(rating::Column::Id)
            .all(db)
            .await?;
        Ok(Lookup::load(db).await?.views(&ratings))
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<RatingView> {
        let r = Self::find(db, id).await?;
        Ok(Lookup::load(db).await?.view(&r))
    }

    pub async fn by_teacher(db: &DatabaseConnection, teacher_id: i64) -> ServiceResult<Vec<RatingView>> {
        TeacherService::find(db, teacher_id).await?;
        let ratings = rating::Model::find_by_teacher(db, teacher_id).await?;
        Ok(Lookup::load(db).await?.views(&ratings))
    }

    /// The student's ratings. Anonymous ones are left out unless the caller
    /// is their author or an administrator.
    pub async fn by_student(
        db: &DatabaseConnection,
        caller: &Caller,
        student_id: i64,
    ) -> ServiceResult<Vec<RatingView>> {
        StudentService::find(db, student_id).await?;
        let mut query = rating::Entity::find()
            .filter(rating::Column::StudentId.eq(student_id))
            .order_by_desc(rating::Column::CreatedDate);
        if !caller.sees_anonymous_of(db, student_id).await? {
            query = query.filter(rating::Column::IsAnonymous.eq(false));
        }
        let ratings = query.all(db).await?;
        Ok(Lookup::load(db).await?.views(&ratings))
    }

    pub async fn recent(db: &DatabaseConnection, count: u64) -> ServiceResult<Vec<RatingView>> {
        if count == 0 || count > MAX_RECENT_COUNT {
            return Err(ServiceError::Validation(format!(
                "Count must be between 1 and {MAX_RECENT_COUNT}"
            )));
        }

        let ratings = rating::Entity::find()
            .order_by_desc(rating::Column::CreatedDate)
            .order_by_desc(rating::Column::Id)
            .limit(count)
            .all(db)
            .await?;
        Ok(Lookup::load(db).await?.views(&ratings))
    }

    pub async fn anonymous(db: &DatabaseConnection) -> ServiceResult<Vec<RatingView>> {
        let ratings = rating::Entity::find()
            .filter(rating::Column::IsAnonymous.eq(true))
            .order_by_desc(rating::Column::CreatedDate)
            .all(db)
            .await?;
        Ok(Lookup::load(db).await?.views(&ratings))
    }

    pub async fn with_details(db: &DatabaseConnection) -> ServiceResult<Vec<RatingDetails>> {
        let lookup = Lookup::load(db).await?;
        let ratings = rating::Entity::find()
            .order_by_desc(rating::Column::CreatedDate)
            .all(db)
            .await?;

        Ok(ratings
            .into_iter()
            .map(|r| {
                let author = lookup.students.get(&r.student_id);
                let visible = author.filter(|_| !r.is_anonymous);
                RatingDetails {
                    id: r.id,
                    score: r.score,
                    teacher_name: lookup
                        .teachers
                        .get(&r.teacher_id)
                        .map(|t| t.full_name())
                        .unwrap_or_default(),
                    student_name: visible.map(|s| s.full_name()),
                    group_number: visible.and_then(|s| lookup.groups.get(&s.group_id).cloned()),
                    review: r.review,
                    is_anonymous: r.is_anonymous,
                    created_date: r.created_date,
                }
            })
            .collect())
    }

    /// Records a rating.
    ///
    /// Administrators rate on behalf of `student_id`; students rate as the
    /// student linked to their account. The teacher must teach the student,
    /// either through the student's group or a direct assignment.
    pub async fn create(
        db: &DatabaseConnection,
        caller: &Caller,
        input: CreateRating,
    ) -> ServiceResult<RatingView> {
        input.validate()?;
        let student_id = Self::acting_student(db, caller, input.student_id).await?;

        let s = student::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::Validation(format!("Student {student_id} does not exist")))?;
        if teacher::Entity::find_by_id(input.teacher_id).one(db).await?.is_none() {
            return Err(ServiceError::Validation(format!(
                "Teacher {} does not exist",
                input.teacher_id
            )));
        }

        if !teacher_ids_for(db, &s).await?.contains(&input.teacher_id) {
            return Err(ServiceError::Validation(format!(
                "Teacher {} does not teach student {student_id}",
                input.teacher_id
            )));
        }

        let duplicate = "This student has already rated this teacher";
        if rating::Model::find_for_pair(db, student_id, input.teacher_id)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(duplicate.into()));
        }

        let created = rating::Model::create(
            db,
            student_id,
            input.teacher_id,
            input.score,
            normalized_review(input.review).as_deref(),
            input.is_anonymous,
        )
        .await
        .map_err(|e| ServiceError::conflict_on_unique(e, duplicate))?;

        tracing::info!(
            rating_id = created.id,
            teacher_id = created.teacher_id,
            by = %caller.username,
            "Rating created"
        );
        Self::get(db, created.id).await
    }

    /// Replaces score, review and anonymity. The creation date is reset.
    pub async fn update(
        db: &DatabaseConnection,
        caller: &Caller,
        id: i64,
        input: UpdateRating,
    ) -> ServiceResult<()> {
        input.validate()?;
        let existing = Self::find(db, id).await?;
        Self::ensure_owner(db, caller, &existing).await?;

        let mut active: rating::ActiveModel = existing.into();
        active.score = Set(input.score);
        active.review = Set(normalized_review(input.review));
        active.is_anonymous = Set(input.is_anonymous);
        active.created_date = Set(Utc::now());
        active.update(db).await?;
        Ok(())
    }

    pub async fn delete(db: &DatabaseConnection, caller: &Caller, id: i64) -> ServiceResult<()> {
        let existing = Self::find(db, id).await?;
        Self::ensure_owner(db, caller, &existing).await?;

        rating::Entity::delete_by_id(id).exec(db).await?;
        tracing::info!(rating_id = id, by = %caller.username, "Rating deleted");
        Ok(())
    }

    async fn find(db: &DatabaseConnection, id: i64) -> ServiceResult<rating::Model> {
        rating::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Rating", id))
    }

    async fn acting_student(
        db: &DatabaseConnection,
        caller: &Caller,
        requested: Option<i64>,
    ) -> ServiceResult<i64> {
        match caller.role {
            Role::Admin => requested.ok_or_else(|| {
                ServiceError::Validation("student_id is required".into())
            }),
            Role::Student => {
                let own = caller.student_id(db).await?.ok_or_else(|| {
                    ServiceError::Forbidden("Your account is not linked to a student".into())
                })?;
                match requested {
                    Some(other) if other != own => Err(ServiceError::Forbidden(
                        "Students can only rate as themselves".into(),
                    )),
                    _ => Ok(own),
                }
            }
            _ => Err(ServiceError::Forbidden(
                "Only administrators and students can rate teachers".into(),
            )),
        }
    }

    async fn ensure_owner(
        db: &DatabaseConnection,
        caller: &Caller,
        r: &rating::Model,
    ) -> ServiceResult<()> {
        if caller.is_admin() {
            return Ok(());
        }
        if caller.role == Role::Student && caller.student_id(db).await? == Some(r.student_id) {
            return Ok(());
        }
        Err(ServiceError::Forbidden(
            "You can only modify your own ratings".into(),
        ))
    }
}

fn normalized_review(review: Option<String>) -> Option<String> {
    review
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
