use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202510010001_create_groups::Migration),
            Box::new(migrations::m202510010002_create_teachers::Migration),
            Box::new(migrations::m202510010003_create_students::Migration),
            Box::new(migrations::m202510010004_create_teacher_groups::Migration),
            Box::new(migrations::m202510010005_create_student_teachers::Migration),
            Box::new(migrations::m202510010006_create_ratings::Migration),
            Box::new(migrations::m202510010007_create_subjects::Migration),
            Box::new(migrations::m202510010008_create_weekly_schedules::Migration),
            Box::new(migrations::m202510010009_create_class_schedules::Migration),
            Box::new(migrations::m202510010010_create_users::Migration),
            Box::new(migrations::m202510010011_seed_reference_data::Migration),
        ]
    }
}
