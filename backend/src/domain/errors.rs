use thiserror::Error;

/// Failures a domain service can report to the IO layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Student not found.")]
    StudentNotFound,

    #[error("No student grade found.")]
    StudentGradeNotFound,

    #[error("No class grade found.")]
    ClassGradeNotFound,

    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    /// Machine-readable error kind sent to clients
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::StudentNotFound => "student_not_found",
            ServiceError::StudentGradeNotFound => "student_grade_not_found",
            ServiceError::ClassGradeNotFound => "class_grade_not_found",
            ServiceError::Storage(_) => "internal_error",
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
