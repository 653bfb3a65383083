pub mod m202510010001_create_groups;
pub mod m202510010002_create_teachers;
pub mod m202510010003_create_students;
pub mod m202510010004_create_teacher_groups;
pub mod m202510010005_create_student_teachers;
pub mod m202510010006_create_ratings;
pub mod m202510010007_create_subjects;
pub mod m202510010008_create_weekly_schedules;
pub mod m202510010009_create_class_schedules;
pub mod m202510010010_create_users;
pub mod m202510010011_seed_reference_data;
