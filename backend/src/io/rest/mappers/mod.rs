//! Conversions from domain values to the DTOs of the `shared` crate.
//! Each exposed JSON shape has one DTO and one mapping function, so the
//! fields sent to clients are fixed at compile time.

pub mod error_mapper;
pub mod grade_mapper;
pub mod student_mapper;
