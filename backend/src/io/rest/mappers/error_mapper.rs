//! backend/src/io/rest/mappers/error_mapper.rs

use shared::{ErrorResponse, FormValueError};

use crate::domain::errors::ServiceError;
use crate::domain::validation::{Violation, FORM_VALUES_ERROR};

/// Mapper from domain failures to error DTOs.
pub struct ErrorMapper;

impl ErrorMapper {
    pub fn to_dto(error: &ServiceError) -> ErrorResponse {
        match error {
            // Storage details stay in the logs
            ServiceError::Storage(_) => ErrorResponse::new(error.kind(), "Internal server error."),
            _ => ErrorResponse::new(error.kind(), &error.to_string()),
        }
    }

    pub fn to_form_value_error(violation: &Violation) -> FormValueError {
        FormValueError {
            error: FORM_VALUES_ERROR.to_string(),
            message: violation.message.clone(),
            property: violation.property.clone(),
        }
    }
}
