use tracing::{info, warn};

use crate::domain::commands::students::{CreateStudentCommand, UpdateStudentCommand};
use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::student::{NewStudent, Student};
use crate::domain::validation::{before_today, date, not_blank, RuleSet};
use crate::storage::traits::{Connection, GradeStorage, StorageTransaction, StudentStorage};

/// Rules for the fields submitted on create and update
pub fn form_rules() -> RuleSet {
    RuleSet::new()
        .field("firstname", vec![not_blank()])
        .field("lastname", vec![not_blank()])
        .field("birthdate", vec![not_blank(), date()])
}

/// Rules checked on the parsed birthdate once the form itself is valid
pub fn birthdate_rules() -> RuleSet {
    RuleSet::new().field("birthdate", vec![before_today()])
}

/// Service for managing students
#[derive(Clone)]
pub struct StudentService<C: Connection> {
    db: C,
}

impl<C: Connection> StudentService<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }

    /// Get a student by ID
    pub async fn get_student(&self, student_id: i64) -> ServiceResult<Option<Student>> {
        let mut tx = self.db.begin().await?;
        let student = tx.get_student(student_id).await?;

        if student.is_none() {
            warn!("Student not found: {}", student_id);
        }

        Ok(student)
    }

    /// Create a new student
    pub async fn create_student(&self, command: CreateStudentCommand) -> ServiceResult<Student> {
        info!(
            "Creating student: {} {}, birthdate={}",
            command.firstname, command.lastname, command.birthdate
        );

        let mut tx = self.db.begin().await?;
        let student = tx
            .store_student(NewStudent {
                firstname: command.firstname,
                lastname: command.lastname,
                birthdate: command.birthdate,
            })
            .await?;
        tx.commit().await?;

        info!("Created student with ID: {}", student.id);
        Ok(student)
    }

    /// Replace the fields of an existing student
    pub async fn update_student(&self, command: UpdateStudentCommand) -> ServiceResult<Student> {
        info!("Updating student: {}", command.student_id);

        let mut tx = self.db.begin().await?;
        let mut student = tx
            .get_student(command.student_id)
            .await?
            .ok_or(ServiceError::StudentNotFound)?;

        student.firstname = command.firstname;
        student.lastname = command.lastname;
        student.birthdate = command.birthdate;

        tx.update_student(&student).await?;
        tx.commit().await?;

        info!("Updated student with ID: {}", student.id);
        Ok(student)
    }

    /// Delete a student together with all of its grades
    pub async fn delete_student(&self, student_id: i64) -> ServiceResult<()> {
        info!("Deleting student: {}", student_id);

        let mut tx = self.db.begin().await?;
        if tx.get_student(student_id).await?.is_none() {
            return Err(ServiceError::StudentNotFound);
        }

        let removed_grades = tx.delete_grades_for_student(student_id).await?;
        tx.delete_student(student_id).await?;
        tx.commit().await?;

        info!(
            "Deleted student {} and {} grade(s)",
            student_id, removed_grades
        );
        Ok(())
    }
}
