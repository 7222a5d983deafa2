//! # Storage Module
//!
//! Persistence for students and grades.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! implementation lives in [`sqlite`] and is built on SQLx.

pub mod sqlite;
pub mod traits;

pub use sqlite::{DbConnection, SqliteTransaction};
pub use traits::{Connection, GradeStorage, StorageTransaction, StudentStorage};
