//! # REST API Interface Layer
//!
//! HTTP endpoints of the gradebook.
//!
//! - `student_apis`: create, update and delete students
//! - `grade_apis`: add grades, student and class averages
//! - `request`: decoding of form and JSON bodies into form values
//! - `response`: JSON response builder and 412 validation responses
//! - `error`: translation of domain errors to HTTP responses
//! - `mappers`: domain values to API DTOs
//!
//! Every response body is JSON, including errors.

pub mod error;
pub mod grade_apis;
pub mod mappers;
pub mod request;
pub mod response;
pub mod student_apis;
