//! backend/src/domain/models/student.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model representing a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub birthdate: NaiveDate,
}

/// A student that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub firstname: String,
    pub lastname: String,
    pub birthdate: NaiveDate,
}

impl NewStudent {
    pub fn with_id(self, id: i64) -> Student {
        Student {
            id,
            firstname: self.firstname,
            lastname: self.lastname,
            birthdate: self.birthdate,
        }
    }
}
