//! Compact views shared by several services.

use chrono::{DateTime, Utc};
use db::models::{group, rating, student, teacher};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde::Serialize;
use std::collections::HashMap;

pub const ANONYMOUS_REVIEWER: &str = "Anonymous";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeacherBrief {
    pub id: i64,
    pub full_name: String,
}

impl From<&teacher::Model> for TeacherBrief {
    fn from(t: &teacher::Model) -> Self {
        Self {
            id: t.id,
            full_name: t.full_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentBrief {
    pub id: i64,
    pub full_name: String,
    pub group_number: String,
}

impl StudentBrief {
    pub fn new(s: &student::Model, groups: &HashMap<i64, String>) -> Self {
        Self {
            id: s.id,
            full_name: s.full_name(),
            group_number: groups.get(&s.group_id).cloned().unwrap_or_default(),
        }
    }
}

/// A rating as shown next to its teacher.
#[derive(Debug, Clone, Serialize)]
pub struct RatingBrief {
    pub id: i64,
    pub score: i32,
    pub stars: String,
    pub review: Option<String>,
    pub is_anonymous: bool,
    pub reviewer_name: String,
    pub created_date: DateTime<Utc>,
}

impl RatingBrief {
    pub fn new(r: &rating::Model, author: Option<&student::Model>) -> Self {
        Self {
            id: r.id,
            score: r.score,
            stars: r.stars_display(),
            review: r.review.clone(),
            is_anonymous: r.is_anonymous,
            reviewer_name: reviewer_name(r, author),
            created_date: r.created_date,
        }
    }
}

/// `Anonymous` for anonymous ratings, otherwise `"{last} {F}."`.
pub fn reviewer_name(r: &rating::Model, author: Option<&student::Model>) -> String {
    if r.is_anonymous {
        return ANONYMOUS_REVIEWER.to_string();
    }
    author
        .map(|s| s.short_name())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub async fn group_numbers(db: &DatabaseConnection) -> Result<HashMap<i64, String>, DbErr> {
    Ok(group::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|g| (g.id, g.group_number))
        .collect())
}

pub async fn students_by_id(
    db: &DatabaseConnection,
) -> Result<HashMap<i64, student::Model>, DbErr> {
    Ok(student::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect())
}

pub async fn teachers_by_id(
    db: &DatabaseConnection,
) -> Result<HashMap<i64, teacher::Model>, DbErr> {
    Ok(teacher::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect())
}

/// Every score grouped by teacher id.
pub async fn scores_by_teacher(db: &DatabaseConnection) -> Result<HashMap<i64, Vec<i32>>, DbErr> {
    let mut scores: HashMap<i64, Vec<i32>> = HashMap::new();
    for r in rating::Entity::find().all(db).await? {
        scores.entry(r.teacher_id).or_default().push(r.score);
    }
    Ok(scores)
}
