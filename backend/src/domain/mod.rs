//! # Domain Module
//!
//! Business rules for students and grades.
//!
//! ## Module Organization
//!
//! - **models**: Student and Grade entities
//! - **validation**: form rule sets and composable validators
//! - **average**: grade averaging and rounding
//! - **student_service**: create, update and delete students
//! - **grade_service**: create grades, student and class averages
//! - **commands**: typed inputs and results of the services
//!
//! ## Business Rules
//!
//! - Names must not be blank
//! - A birthdate is a real calendar day strictly before today
//! - A grade value is an integer between 0 and 20 included
//! - A grade always belongs to an existing student; deleting the student
//!   deletes its grades
//! - Averages are rounded to two decimals, half away from zero

pub mod average;
pub mod commands;
pub mod errors;
pub mod grade_service;
pub mod models;
pub mod student_service;
pub mod validation;

pub use errors::{ServiceError, ServiceResult};
pub use grade_service::GradeService;
pub use student_service::StudentService;
