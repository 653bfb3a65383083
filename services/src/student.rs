use crate::auth::Caller;
use crate::error::{ServiceError, ServiceResult};
use crate::group::GroupService;
use crate::teacher::TeacherService;
use crate::views::{TeacherBrief, group_numbers, scores_by_teacher, teachers_by_id};
use chrono::{DateTime, Utc};
use db::models::{
    group,
    rating::{self, average_score},
    student, student_teacher, teacher,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use util::validation::validate_not_blank;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudentInput {
    #[validate(
        length(max = 100, message = "First name must be at most 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: String,
    #[validate(
        length(max = 100, message = "Last name must be at most 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: String,
    #[validate(length(max = 100, message = "Middle name must be at most 100 characters"))]
    pub middle_name: Option<String>,
    pub group_id: i64,
}

impl StudentInput {
    fn middle_name(&self) -> Option<String> {
        self.middle_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub id: i64,
    pub full_name: String,
    pub group_number: String,
    pub ratings_count: usize,
}

/// A rating seen from the student who left it.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRating {
    pub id: i64,
    pub score: i32,
    pub stars: String,
    pub review: Option<String>,
    pub is_anonymous: bool,
    pub created_date: DateTime<Utc>,
    pub teacher: Option<TeacherBrief>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub full_name: String,
    pub group_id: i64,
    pub group_number: String,
    pub ratings: Vec<StudentRating>,
    pub teachers: Vec<TeacherBrief>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentTeacher {
    pub id: i64,
    pub full_name: String,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CanRate {
    pub student_id: i64,
    pub teacher_id: i64,
    pub teaches_student: bool,
    pub already_rated: bool,
    pub can_rate: bool,
}

pub struct StudentService;

impl StudentService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<StudentSummary>> {
        let students = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?;
        Self::summaries(db, students).await
    }

    /// Anonymous ratings are left out unless `viewer` may see them.
    pub async fn get(
        db: &DatabaseConnection,
        viewer: Option<&Caller>,
        id: i64,
    ) -> ServiceResult<StudentDetail> {
        let s = Self::find(db, id).await?;
        let group_number = group_numbers(db)
            .await?
            .remove(&s.group_id)
            .unwrap_or_default();

        let ratings = Self::ratings_of(db, &s, shows_anonymous(db, viewer, id).await?).await?;
        let teachers = Self::teachers(db, id)
            .await?
            .into_iter()
            .map(|t| TeacherBrief {
                id: t.id,
                full_name: t.full_name,
            })
            .collect();

        Ok(StudentDetail {
            id: s.id,
            full_name: s.full_name(),
            first_name: s.first_name,
            last_name: s.last_name,
            middle_name: s.middle_name,
            group_id: s.group_id,
            group_number,
            ratings,
            teachers,
        })
    }

    pub async fn create(db: &DatabaseConnection, input: StudentInput) -> ServiceResult<StudentDetail> {
        input.validate()?;
        Self::ensure_group(db, input.group_id).await?;

        let created = student::Model::create(
            db,
            input.first_name.trim(),
            input.last_name.trim(),
            input.middle_name().as_deref(),
            input.group_id,
        )
        .await?;

        tracing::info!(student_id = created.id, group_id = created.group_id, "Created student");
        Self::get(db, None, created.id).await
    }

    pub async fn update(db: &DatabaseConnection, id: i64, input: StudentInput) -> ServiceResult<()> {
        input.validate()?;
        let existing = Self::find(db, id).await?;
        Self::ensure_group(db, input.group_id).await?;

        let mut active: student::ActiveModel = existing.into();
        active.first_name = Set(input.first_name.trim().to_owned());
        active.last_name = Set(input.last_name.trim().to_owned());
        active.middle_name = Set(input.middle_name());
        active.group_id = Set(input.group_id);
        active.update(db).await?;
        Ok(())
    }

    /// Removes the student and, by cascade, their ratings and assignments.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> ServiceResult<()> {
        let result = student::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Student", id));
        }
        tracing::info!(student_id = id, "Deleted student");
        Ok(())
    }

    pub async fn assign_teacher(
        db: &DatabaseConnection,
        student_id: i64,
        teacher_id: i64,
    ) -> ServiceResult<()> {
        Self::find(db, student_id).await?;
        TeacherService::find(db, teacher_id).await?;

        if student_teacher::Model::is_assigned(db, student_id, teacher_id).await? {
            return Err(ServiceError::Conflict(format!(
                "Teacher {teacher_id} is already assigned to student {student_id}"
            )));
        }

        student_teacher::Model::assign(db, student_id, teacher_id)
            .await
            .map_err(|e| ServiceError::conflict_on_unique(e, "Teacher is already assigned"))?;
        Ok(())
    }

    pub async fn by_group(
        db: &DatabaseConnection,
        group_number: &str,
    ) -> ServiceResult<Vec<StudentSummary>> {
        let g = GroupService::find_by_number(db, group_number).await?;
        let students = student::Model::find_by_group(db, g.id).await?;
        Self::summaries(db, students).await
    }

    /// Teachers of the student's group together with explicitly assigned ones.
    pub async fn teachers(db: &DatabaseConnection, id: i64) -> ServiceResult<Vec<StudentTeacher>> {
        let s = Self::find(db, id).await?;
        let ids = teacher_ids_for(db, &s).await?;
        let teachers = teachers_by_id(db).await?;
        let scores = scores_by_teacher(db).await?;

        Ok(ids
            .into_iter()
            .filter_map(|tid| teachers.get(&tid))
            .map(|t| StudentTeacher {
                id: t.id,
                full_name: t.full_name(),
                average_rating: average_score(scores.get(&t.id).map(Vec::as_slice).unwrap_or(&[])),
            })
            .collect())
    }

    pub async fn can_rate(
        db: &DatabaseConnection,
        student_id: i64,
        teacher_id: i64,
    ) -> ServiceResult<CanRate> {
        let s = Self::find(db, student_id).await?;
        TeacherService::find(db, teacher_id).await?;

        let teaches_student = teacher_ids_for(db, &s).await?.contains(&teacher_id);
        let already_rated = rating::Model::find_for_pair(db, student_id, teacher_id)
            .await?
            .is_some();

        Ok(CanRate {
            student_id,
            teacher_id,
            teaches_student,
            already_rated,
            can_rate: teaches_student && !already_rated,
        })
    }

    /// Every rating the student has left, newest first. Anonymous ones only
    /// for the student themselves or an administrator.
    pub async fn ratings_report(
        db: &DatabaseConnection,
        caller: &Caller,
        id: i64,
    ) -> ServiceResult<Vec<StudentRating>> {
        let s = Self::find(db, id).await?;
        let include_anonymous = caller.sees_anonymous_of(db, id).await?;
        Self::ratings_of(db, &s, include_anonymous).await
    }

    async fn ratings_of(
        db: &DatabaseConnection,
        s: &student::Model,
        include_anonymous: bool,
    ) -> ServiceResult<Vec<StudentRating>> {
        let mut query = s
            .find_related(rating::Entity)
            .order_by_desc(rating::Column::CreatedDate);
        if !include_anonymous {
            query = query.filter(rating::Column::IsAnonymous.eq(false));
        }
        let ratings = query.find_also_related(teacher::Entity).all(db).await?;

        Ok(ratings
            .into_iter()
            .map(|(r, t)| StudentRating {
                id: r.id,
                score: r.score,
                stars: r.stars_display(),
                review: r.review,
                is_anonymous: r.is_anonymous,
                created_date: r.created_date,
                teacher: t.as_ref().map(TeacherBrief::from),
            })
            .collect())
    }

    pub async fn find(db: &DatabaseConnection, id: i64) -> ServiceResult<student::Model> {
        student::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Student", id))
    }

    async fn ensure_group(db: &DatabaseConnection, group_id: i64) -> ServiceResult<()> {
        match group::Entity::find_by_id(group_id).one(db).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::Validation(format!(
                "Group {group_id} does not exist"
            ))),
        }
    }

    async fn summaries(
        db: &DatabaseConnection,
        students: Vec<student::Model>,
    ) -> ServiceResult<Vec<StudentSummary>> {
        let groups = group_numbers(db).await?;
        let mut counts = std::collections::HashMap::<i64, usize>::new();
        for r in rating::Entity::find().all(db).await? {
            *counts.entry(r.student_id).or_default() += 1;
        }

        Ok(students
            .iter()
            .map(|s| StudentSummary {
                id: s.id,
                full_name: s.full_name(),
                group_number: groups.get(&s.group_id).cloned().unwrap_or_default(),
                ratings_count: counts.get(&s.id).copied().unwrap_or(0),
            })
            .collect())
    }
}

async fn shows_anonymous(
    db: &DatabaseConnection,
    viewer: Option<&Caller>,
    student_id: i64,
) -> ServiceResult<bool> {
    match viewer {
        Some(caller) => caller.sees_anonymous_of(db, student_id).await,
        None => Ok(false),
    }
}

/// Ids of every teacher allowed to be rated by the student: teachers of the
/// student's group plus those assigned to the student directly.
pub async fn teacher_ids_for(
    db: &DatabaseConnection,
    s: &student::Model,
) -> ServiceResult<BTreeSet<i64>> {
    let mut ids: BTreeSet<i64> = teacher::Model::find_by_group(db, s.group_id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    ids.extend(
        student_teacher::Entity::find()
            .filter(student_teacher::Column::StudentId.eq(s.id))
            .all(db)
            .await?
            .into_iter()
            .map(|link| link.teacher_id),
    );
    Ok(ids)
}
