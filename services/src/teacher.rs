use crate::error::{ServiceError, ServiceResult};
use crate::group::GroupService;
use crate::views::{
    RatingBrief, StudentBrief, group_numbers, reviewer_name, scores_by_teacher, students_by_id,
};
use chrono::{DateTime, Utc};
use db::models::{
    group,
    rating::{self, average_score},
    student, teacher, teacher_group,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use util::validation::validate_not_blank;
use validator::Validate;

pub const MAX_TOP_COUNT: u64 = 100;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeacherInput {
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
}

impl TeacherInput {
    fn middle_name(&self) -> Option<String> {
        self.middle_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherSummary {
    pub id: i64,
    pub full_name: String,
    pub average_rating: f64,
    pub ratings_count: usize,
}

impl TeacherSummary {
    fn new(t: &teacher::Model, scores: &[i32]) -> Self {
        Self {
            id: t.id,
            full_name: t.full_name(),
            average_rating: average_score(scores),
            ratings_count: scores.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherDetail {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub full_name: String,
    pub average_rating: f64,
    pub ratings_count: usize,
    pub groups: Vec<String>,
    pub ratings: Vec<RatingBrief>,
    pub students: Vec<StudentBrief>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherWithRatings {
    pub id: i64,
    pub full_name: String,
    pub average_rating: f64,
    pub ratings: Vec<RatingBrief>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageRating {
    pub teacher_id: i64,
    pub full_name: String,
    pub average_rating: f64,
    pub ratings_count: usize,
}

/// How one teacher is rated by the students of a single group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupTeacherStatistics {
    pub teacher_id: i64,
    pub teacher: String,
    pub average_rating: f64,
    pub ratings_count: usize,
    pub reviews_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeachingGroup {
    pub group_number: String,
    pub students_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRating {
    pub score: i32,
    pub stars: String,
    pub review: Option<String>,
    pub is_anonymous: bool,
    pub author: String,
    pub student_group: Option<String>,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherReport {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub average_rating: f64,
    pub total_ratings: usize,
    pub teaching_groups: Vec<TeachingGroup>,
    pub ratings: Vec<ReportRating>,
}

pub struct TeacherService;

impl TeacherService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<TeacherSummary>> {
        let scores = scores_by_teacher(db).await?;
        let teachers = teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .all(db)
            .await?;

        Ok(teachers
            .iter()
            .map(|t| TeacherSummary::new(t, scores_for(&scores, t.id)))
            .collect())
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<TeacherDetail> {
        let t = Self::find(db, id).await?;

        let groups = t
            .find_related(group::Entity)
            .order_by_asc(group::Column::GroupNumber)
            .all(db)
            .await?
            .into_iter()
            .map(|g| g.group_number)
            .collect();

        let ratings: Vec<RatingBrief> = t
            .find_related(rating::Entity)
            .order_by_desc(rating::Column::CreatedDate)
            .find_also_related(student::Entity)
            .all(db)
            .await?
            .iter()
            .map(|(r, s)| RatingBrief::new(r, s.as_ref()))
            .collect();

        let group_map = group_numbers(db).await?;
        let students = t
            .find_related(student::Entity)
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?
            .iter()
            .map(|s| StudentBrief::new(s, &group_map))
            .collect();

        let scores: Vec<i32> = ratings.iter().map(|r| r.score).collect();
        Ok(TeacherDetail {
            id: t.id,
            full_name: t.full_name(),
            first_name: t.first_name,
            last_name: t.last_name,
            middle_name: t.middle_name,
            average_rating: average_score(&scores),
            ratings_count: scores.len(),
            groups,
            ratings,
            students,
        })
    }

    pub async fn create(db: &DatabaseConnection, input: TeacherInput) -> ServiceResult<TeacherDetail> {
        input.validate()?;

        let created = teacher::Model::create(
            db,
            input.first_name.trim(),
            input.last_name.trim(),
            input.middle_name().as_deref(),
        )
        .await?;

        tracing::info!(teacher_id = created.id, "Created teacher");
        Self::get(db, created.id).await
    }

    pub async fn update(db: &DatabaseConnection, id: i64, input: TeacherInput) -> ServiceResult<()> {
        input.validate()?;
        let existing = Self::find(db, id).await?;

        let mut active: teacher::ActiveModel = existing.into();
        active.first_name = Set(input.first_name.trim().to_owned());
        active.last_name = Set(input.last_name.trim().to_owned());
        active.middle_name = Set(input.middle_name());
        active.update(db).await?;
        Ok(())
    }

    /// Removes the teacher together with their ratings and group links.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> ServiceResult<()> {
        let result = teacher::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("Teacher", id));
        }
        tracing::info!(teacher_id = id, "Deleted teacher");
        Ok(())
    }

    /// Best rated teachers first. Teachers without ratings are left out.
    pub async fn top(db: &DatabaseConnection, count: u64) -> ServiceResult<Vec<TeacherSummary>> {
        if count == 0 || count > MAX_TOP_COUNT {
            return Err(ServiceError::Validation(format!(
                "Count must be between 1 and {MAX_TOP_COUNT}"
            )));
        }

        let mut rated = Self::rated(db).await?;
        rated.truncate(count as usize);
        Ok(rated)
    }

    pub async fn with_ratings(db: &DatabaseConnection) -> ServiceResult<Vec<TeacherWithRatings>> {
        let students = students_by_id(db).await?;
        let teachers = teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .find_with_related(rating::Entity)
            .all(db)
            .await?;

        Ok(teachers
            .into_iter()
            .filter(|(_, ratings)| !ratings.is_empty())
            .map(|(t, ratings)| {
                let scores: Vec<i32> = ratings.iter().map(|r| r.score).collect();
                TeacherWithRatings {
                    id: t.id,
                    full_name: t.full_name(),
                    average_rating: average_score(&scores),
                    ratings: ratings
                        .iter()
                        .map(|r| RatingBrief::new(r, students.get(&r.student_id)))
                        .collect(),
                }
            })
            .collect())
    }

    pub async fn without_ratings(db: &DatabaseConnection) -> ServiceResult<Vec<TeacherSummary>> {
        Ok(Self::list(db)
            .await?
            .into_iter()
            .filter(|t| t.ratings_count == 0)
            .collect())
    }

    /// Rated teachers whose average lies within `[min, max]`, best first.
    pub async fn by_rating_range(
        db: &DatabaseConnection,
        min: f64,
        max: f64,
    ) -> ServiceResult<Vec<TeacherSummary>> {
        let bounds = f64::from(rating::MIN_SCORE)..=f64::from(rating::MAX_SCORE);
        if !bounds.contains(&min) || !bounds.contains(&max) || min > max {
            return Err(ServiceError::Validation(
                "Range must satisfy 1 <= min <= max <= 5".into(),
            ));
        }

        Ok(Self::rated(db)
            .await?
            .into_iter()
            .filter(|t| t.average_rating >= min && t.average_rating <= max)
            .collect())
    }

    pub async fn average_rating(db: &DatabaseConnection, id: i64) -> ServiceResult<AverageRating> {
        let t = Self::find(db, id).await?;
        let scores: Vec<i32> = rating::Model::find_by_teacher(db, id)
            .await?
            .iter()
            .map(|r| r.score)
            .collect();

        Ok(AverageRating {
            teacher_id: t.id,
            full_name: t.full_name(),
            average_rating: average_score(&scores),
            ratings_count: scores.len(),
        })
    }

    pub async fn by_group(
        db: &DatabaseConnection,
        group_number: &str,
    ) -> ServiceResult<Vec<TeacherSummary>> {
        let g = GroupService::find_by_number(db, group_number).await?;
        let scores = scores_by_teacher(db).await?;

        Ok(teacher::Model::find_by_group(db, g.id)
            .await?
            .iter()
            .map(|t| TeacherSummary::new(t, scores_for(&scores, t.id)))
            .collect())
    }

    pub async fn add_group(db: &DatabaseConnection, teacher_id: i64, group_id: i64) -> ServiceResult<()> {
        Self::find(db, teacher_id).await?;
        group::Entity::find_by_id(group_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", group_id))?;

        if teacher_group::Model::find_link(db, teacher_id, group_id).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Teacher {teacher_id} already teaches group {group_id}"
            )));
        }

        teacher_group::Model::create(db, teacher_id, group_id)
            .await
            .map_err(|e| ServiceError::conflict_on_unique(e, "Teacher already teaches this group"))?;
        Ok(())
    }

    pub async fn remove_group(
        db: &DatabaseConnection,
        teacher_id: i64,
        group_id: i64,
    ) -> ServiceResult<()> {
        let link = teacher_group::Model::find_link(db, teacher_id, group_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "Teacher {teacher_id} does not teach group {group_id}"
                ))
            })?;
        link.delete(db).await?;
        Ok(())
    }

    /// Per-teacher figures computed only from ratings left by the group's students.
    pub async fn group_statistics(
        db: &DatabaseConnection,
        group_number: &str,
    ) -> ServiceResult<Vec<GroupTeacherStatistics>> {
        let g = GroupService::find_by_number(db, group_number).await?;
        let student_ids: Vec<i64> = student::Model::find_by_group(db, g.id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mut stats = Vec::new();
        for t in teacher::Model::find_by_group(db, g.id).await? {
            let ratings = rating::Entity::find()
                .filter(rating::Column::TeacherId.eq(t.id))
                .filter(rating::Column::StudentId.is_in(student_ids.clone()))
                .all(db)
                .await?;
            let scores: Vec<i32> = ratings.iter().map(|r| r.score).collect();

            stats.push(GroupTeacherStatistics {
                teacher_id: t.id,
                teacher: t.full_name(),
                average_rating: average_score(&scores),
                ratings_count: scores.len(),
                reviews_count: ratings
                    .iter()
                    .filter(|r| r.review.as_deref().is_some_and(|text| !text.trim().is_empty()))
                    .count(),
            });
        }

        stats.sort_by(|a, b| by_average_desc(a.average_rating, b.average_rating));
        Ok(stats)
    }

    pub async fn report(db: &DatabaseConnection, id: i64) -> ServiceResult<TeacherReport> {
        let t = Self::find(db, id).await?;
        let group_map = group_numbers(db).await?;

        let mut teaching_groups = Vec::new();
        for g in t
            .find_related(group::Entity)
            .order_by_asc(group::Column::GroupNumber)
            .all(db)
            .await?
        {
            let students_count = student::Entity::find()
                .filter(student::Column::GroupId.eq(g.id))
                .count(db)
                .await?;
            teaching_groups.push(TeachingGroup {
                group_number: g.group_number,
                students_count,
            });
        }

        let ratings = t
            .find_related(rating::Entity)
            .order_by_desc(rating::Column::CreatedDate)
            .find_also_related(student::Entity)
            .all(db)
            .await?;
        let scores: Vec<i32> = ratings.iter().map(|(r, _)| r.score).collect();

        Ok(TeacherReport {
            teacher_id: t.id,
            teacher_name: t.full_name(),
            average_rating: average_score(&scores),
            total_ratings: scores.len(),
            teaching_groups,
            ratings: ratings
                .iter()
                .map(|(r, s)| ReportRating {
                    score: r.score,
                    stars: r.stars_display(),
                    review: r.review.clone(),
                    is_anonymous: r.is_anonymous,
                    author: reviewer_name(r, s.as_ref()),
                    student_group: s
                        .as_ref()
                        .filter(|_| !r.is_anonymous)
                        .and_then(|s| group_map.get(&s.group_id).cloned()),
                    created_date: r.created_date,
                })
                .collect(),
        })
    }

    pub async fn find(db: &DatabaseConnection, id: i64) -> ServiceResult<teacher::Model> {
        teacher::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Teacher", id))
    }

    /// Teachers with at least one rating, ordered by average descending.
    async fn rated(db: &DatabaseConnection) -> ServiceResult<Vec<TeacherSummary>> {
        let mut rated: Vec<TeacherSummary> = Self::list(db)
            .await?
            .into_iter()
            .filter(|t| t.ratings_count > 0)
            .collect();

        rated.sort_by(|a, b| {
            by_average_desc(a.average_rating, b.average_rating)
                .then(b.ratings_count.cmp(&a.ratings_count))
                .then(a.id.cmp(&b.id))
        });
        Ok(rated)
    }
}

fn scores_for(scores: &HashMap<i64, Vec<i32>>, teacher_id: i64) -> &[i32] {
    scores.get(&teacher_id).map(Vec::as_slice).unwrap_or(&[])
}

fn by_average_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
