//! Domain operations for the rating backend.
//!
//! Each resource has its own service module. Services take a database
//! connection, validate input, and return serializable views or a
//! [`ServiceError`] that the HTTP layer maps onto a status code.

pub mod auth;
pub mod class_schedule;
pub mod error;
pub mod group;
pub mod rating;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod views;
pub mod weekly_schedule;

pub use error::{ServiceError, ServiceResult};
