//! backend/src/domain/models/grade.rs

use serde::{Deserialize, Serialize};

/// Lowest accepted grade value
pub const MIN_GRADE_VALUE: i64 = 0;
/// Highest accepted grade value
pub const MAX_GRADE_VALUE: i64 = 20;

/// Domain model representing a grade. A grade always belongs to one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub value: i64,
    pub subject: String,
    pub student_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGrade {
    pub value: i64,
    pub subject: String,
    pub student_id: i64,
}

impl NewGrade {
    pub fn with_id(self, id: i64) -> Grade {
        Grade {
            id,
            value: self.value,
            subject: self.subject,
            student_id: self.student_id,
        }
    }
}
