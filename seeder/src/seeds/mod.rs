pub mod rating;
pub mod schedule;
pub mod subject;
pub mod user;
