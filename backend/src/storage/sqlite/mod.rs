//! # SQLite Storage Module
//!
//! - **connection.rs** - pool setup, schema and transactions
//! - **student_repository.rs** - `StudentStorage` queries
//! - **grade_repository.rs** - `GradeStorage` queries

pub mod connection;
pub mod grade_repository;
pub mod student_repository;

pub use connection::{DbConnection, SqliteTransaction};
