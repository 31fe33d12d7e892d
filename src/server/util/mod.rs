//! Small helpers shared by controllers and services.

pub mod json;
pub mod password;
pub mod path;
pub mod query;
