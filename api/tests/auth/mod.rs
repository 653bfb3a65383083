pub mod extractors_test;
pub mod guards_test;
