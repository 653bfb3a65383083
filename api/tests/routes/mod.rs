mod auth_test;
mod class_schedules_test;
mod groups_test;
mod health_test;
mod ratings_test;
mod students_test;
mod subjects_test;
mod teachers_test;
mod weekly_schedules_test;
