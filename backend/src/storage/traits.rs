//! # Storage Traits
//!
//! Storage abstraction used by the domain services. Every service operation
//! runs inside one [`StorageTransaction`] obtained from a [`Connection`]:
//! begin, act, commit. Dropping a transaction without committing rolls it back.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::grade::{Grade, NewGrade};
use crate::domain::models::student::{NewStudent, Student};

/// Student persistence operations
#[async_trait]
pub trait StudentStorage: Send {
    /// Store a new student and return it with its assigned id
    async fn store_student(&mut self, student: NewStudent) -> Result<Student>;

    /// Retrieve a student by id
    async fn get_student(&mut self, student_id: i64) -> Result<Option<Student>>;

    /// Overwrite the mutable fields of an existing student
    async fn update_student(&mut self, student: &Student) -> Result<()>;

    /// Delete a student; returns false when nothing was deleted
    async fn delete_student(&mut self, student_id: i64) -> Result<bool>;
}

/// Grade persistence operations
#[async_trait]
pub trait GradeStorage: Send {
    /// Store a new grade and return it with its assigned id
    async fn store_grade(&mut self, grade: NewGrade) -> Result<Grade>;

    /// All grades of one student, oldest first
    async fn list_grades_for_student(&mut self, student_id: i64) -> Result<Vec<Grade>>;

    /// Every grade in the store, oldest first
    async fn list_grades(&mut self) -> Result<Vec<Grade>>;

    /// Delete all grades of one student; returns the number of rows removed
    async fn delete_grades_for_student(&mut self, student_id: i64) -> Result<u64>;
}

/// A unit of work spanning student and grade storage
#[async_trait]
pub trait StorageTransaction: StudentStorage + GradeStorage + Sized {
    async fn commit(self) -> Result<()>;
}

/// Storage connection able to open transactions.
///
/// Services are generic over this trait so the backend can be swapped
/// without touching domain code.
#[async_trait]
pub trait Connection: Send + Sync + Clone + 'static {
    type Transaction: StorageTransaction;

    async fn begin(&self) -> Result<Self::Transaction>;
}
