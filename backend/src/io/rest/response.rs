//! Response builder.
//!
//! All handlers write their output through [`create_response`], which fixes
//! the `Content-Type` to `application/json`. Validation failures are rendered
//! by [`form_values_response`] as a 412 with one entry per violation.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::{ErrorResponse, FormValueError};
use tracing::{error, info};

use crate::domain::validation::{FormValues, RuleSet, Violations};
use crate::io::rest::mappers::error_mapper::ErrorMapper;

pub const JSON_CONTENT_TYPE: &str = "application/json";

const INTERNAL_ERROR_BODY: &str =
    r#"{"error":"internal_error","message":"Internal server error."}"#;

/// Serialize a DTO to its JSON text
pub fn serialize_data<T: Serialize + ?Sized>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string(data)
}

/// Wrap an already serialized JSON payload. Status defaults to 200.
pub fn create_response(payload: String, status: Option<StatusCode>) -> Response {
    let mut response = (status.unwrap_or(StatusCode::OK), payload).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}

/// Serialize `data` and wrap it with `status`
pub fn json_response<T: Serialize + ?Sized>(data: &T, status: StatusCode) -> Response {
    match serialize_data(data) {
        Ok(payload) => create_response(payload, Some(status)),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            internal_error_response()
        }
    }
}

/// `{error, message}` body with the given status
pub fn error_response(body: &ErrorResponse, status: StatusCode) -> Response {
    json_response(body, status)
}

pub fn internal_error_response() -> Response {
    create_response(
        INTERNAL_ERROR_BODY.to_string(),
        Some(StatusCode::INTERNAL_SERVER_ERROR),
    )
}

/// 412 response listing every violation
pub fn form_values_response(violations: &Violations) -> Response {
    let errors: Vec<FormValueError> = violations
        .iter()
        .map(ErrorMapper::to_form_value_error)
        .collect();
    json_response(&errors, StatusCode::PRECONDITION_FAILED)
}

/// Check `values` against `rules`. `None` means the request may proceed.
pub fn validate_request(rules: &RuleSet, values: &FormValues) -> Option<Response> {
    rules.check(values).err().map(|violations| {
        info!("Rejected form values: {:?}", violations.0);
        form_values_response(&violations)
    })
}

impl IntoResponse for Violations {
    fn into_response(self) -> Response {
        form_values_response(&self)
    }
}
