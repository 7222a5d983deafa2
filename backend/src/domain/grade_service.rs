use tracing::{info, warn};

use crate::domain::average::average;
use crate::domain::commands::grades::{AverageResult, CreateGradeCommand, CreateGradeResult};
use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::grade::{Grade, NewGrade, MAX_GRADE_VALUE, MIN_GRADE_VALUE};
use crate::domain::validation::{
    greater_than_or_equal, integer, less_than_or_equal, not_blank, RuleSet,
};
use crate::storage::traits::{Connection, GradeStorage, StorageTransaction, StudentStorage};

/// Rules for the fields submitted when adding a grade
pub fn form_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "value",
            vec![
                integer(),
                greater_than_or_equal(MIN_GRADE_VALUE),
                less_than_or_equal(MAX_GRADE_VALUE),
            ],
        )
        .field("subject", vec![not_blank()])
}

/// Service for grades and grade averages
#[derive(Clone)]
pub struct GradeService<C: Connection> {
    db: C,
}

impl<C: Connection> GradeService<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }

    /// Add a grade to an existing student
    pub async fn create_grade(&self, command: CreateGradeCommand) -> ServiceResult<CreateGradeResult> {
        info!(
            "Creating grade for student {}: {} in {}",
            command.student_id, command.value, command.subject
        );

        let mut tx = self.db.begin().await?;
        let student = tx
            .get_student(command.student_id)
            .await?
            .ok_or(ServiceError::StudentNotFound)?;

        let grade = tx
            .store_grade(NewGrade {
                value: command.value,
                subject: command.subject,
                student_id: student.id,
            })
            .await?;
        tx.commit().await?;

        info!("Created grade with ID: {}", grade.id);
        Ok(CreateGradeResult { grade, student })
    }

    /// Average of every grade of one student
    pub async fn student_average(&self, student_id: i64) -> ServiceResult<AverageResult> {
        info!("Computing average for student {}", student_id);

        let mut tx = self.db.begin().await?;
        if tx.get_student(student_id).await?.is_none() {
            return Err(ServiceError::StudentNotFound);
        }

        let grades = tx.list_grades_for_student(student_id).await?;
        if grades.is_empty() {
            warn!("Student {} has no grade", student_id);
            return Err(ServiceError::StudentGradeNotFound);
        }

        Ok(Self::average_of(&grades))
    }

    /// Average of every grade in the store
    pub async fn class_average(&self) -> ServiceResult<AverageResult> {
        info!("Computing class average");

        let mut tx = self.db.begin().await?;
        let grades = tx.list_grades().await?;
        if grades.is_empty() {
            warn!("No grade stored yet");
            return Err(ServiceError::ClassGradeNotFound);
        }

        Ok(Self::average_of(&grades))
    }

    fn average_of(grades: &[Grade]) -> AverageResult {
        let values: Vec<i64> = grades.iter().map(|g| g.value).collect();
        AverageResult {
            average: average(&values),
            grade_count: values.len(),
        }
    }
}
