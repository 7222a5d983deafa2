//! # REST API for Student Management
//!
//! Create, update and delete students. Create takes a url-encoded form;
//! update takes a JSON object with the same fields.

use axum::{
    body::Bytes,
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use chrono::NaiveDate;
use shared::DeletedResponse;
use tracing::info;

use crate::domain::commands::students::{CreateStudentCommand, UpdateStudentCommand};
use crate::domain::errors::ServiceError;
use crate::domain::student_service::{birthdate_rules, form_rules};
use crate::domain::validation::{require_date, require_text, FormValues};
use crate::io::rest::mappers::student_mapper::StudentMapper;
use crate::io::rest::request::{form_values, json_form_values, path_id};
use crate::io::rest::response::{json_response, validate_request};
use crate::AppState;

/// Validated student fields
struct StudentFields {
    firstname: String,
    lastname: String,
    birthdate: NaiveDate,
}

/// Create a new student
pub async fn create_student(
    State(state): State<AppState>,
    form: Result<Form<FormValues>, FormRejection>,
) -> impl IntoResponse {
    let values = form_values(form);
    info!("POST /api/student - request: {:?}", values);

    let fields = match validate_student(&values) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    let command = CreateStudentCommand {
        firstname: fields.firstname,
        lastname: fields.lastname,
        birthdate: fields.birthdate,
    };
    match state.student_service.create_student(command).await {
        Ok(student) => json_response(&StudentMapper::to_dto(&student), StatusCode::CREATED),
        Err(e) => e.into_response(),
    }
}

/// Replace the fields of a student
pub async fn update_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> impl IntoResponse {
    let Some(student_id) = path_id(path) else {
        return ServiceError::StudentNotFound.into_response();
    };
    info!("PUT /api/student/{} - {} byte body", student_id, body.len());

    // Unknown students are reported before the body is looked at
    match state.student_service.get_student(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return ServiceError::StudentNotFound.into_response(),
        Err(e) => return e.into_response(),
    }

    let values = match json_form_values(&body) {
        Ok(values) => values,
        Err(violations) => return violations.into_response(),
    };
    info!("PUT /api/student/{} - request: {:?}", student_id, values);

    let fields = match validate_student(&values) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    let command = UpdateStudentCommand {
        student_id,
        firstname: fields.firstname,
        lastname: fields.lastname,
        birthdate: fields.birthdate,
    };
    match state.student_service.update_student(command).await {
        Ok(student) => json_response(&StudentMapper::to_dto(&student), StatusCode::OK),
        Err(e) => e.into_response(),
    }
}

/// Delete a student and its grades
pub async fn delete_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Some(student_id) = path_id(path) else {
        return ServiceError::StudentNotFound.into_response();
    };
    info!("DELETE /api/student/{}", student_id);

    match state.student_service.delete_student(student_id).await {
        Ok(()) => json_response(
            &DeletedResponse {
                ok: "Student deleted.".to_string(),
            },
            StatusCode::OK,
        ),
        Err(e) => e.into_response(),
    }
}

/// Form rules first, then the birthdate rules on the parsed date
fn validate_student(values: &FormValues) -> Result<StudentFields, Response> {
    if let Some(response) = validate_request(&form_rules(), values) {
        return Err(response);
    }

    let birthdate = require_date(values, "birthdate").map_err(IntoResponse::into_response)?;
    let parsed: FormValues = [(
        "birthdate".to_string(),
        birthdate.format("%Y-%m-%d").to_string(),
    )]
    .into_iter()
    .collect();
    if let Some(response) = validate_request(&birthdate_rules(), &parsed) {
        return Err(response);
    }

    Ok(StudentFields {
        firstname: require_text(values, "firstname").map_err(IntoResponse::into_response)?,
        lastname: require_text(values, "lastname").map_err(IntoResponse::into_response)?,
        birthdate,
    })
}
