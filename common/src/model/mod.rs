pub mod application;
pub mod grade_level;
