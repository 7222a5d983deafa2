use serde::{Deserialize, Serialize};

/// Student as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    /// Midnight of the birth date with zero offset (e.g. "1990-01-01T00:00:00+00:00")
    pub birthdate: String,
}

/// Grade as exposed by the API, with its owning student nested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    /// Between 0 and 20 included
    pub value: i64,
    pub subject: String,
    pub student: Student,
}

/// Average of a set of grades, rounded to two decimals.
/// `None` is serialized as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageResponse {
    pub average: Option<f64>,
}

/// Body of 404 and 500 responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// One entry of the array returned with a 412 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValueError {
    /// Always "form_values_error"
    pub error: String,
    pub message: String,
    /// Name of the offending field
    pub property: String,
}

/// Body returned after a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedResponse {
    #[serde(rename = "OK")]
    pub ok: String,
}
