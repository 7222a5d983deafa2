//! # REST API for Grades
//!
//! Adding grades to a student, and averages per student or for the whole class.

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use tracing::info;

use crate::domain::commands::grades::CreateGradeCommand;
use crate::domain::errors::ServiceError;
use crate::domain::grade_service::form_rules;
use crate::domain::validation::{require_integer, require_text, FormValues};
use crate::io::rest::mappers::grade_mapper::GradeMapper;
use crate::io::rest::request::{form_values, path_id};
use crate::io::rest::response::{json_response, validate_request};
use crate::AppState;

/// Add a grade to a student
pub async fn create_grade(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<FormValues>, FormRejection>,
) -> impl IntoResponse {
    let Some(student_id) = path_id(path) else {
        return ServiceError::StudentNotFound.into_response();
    };
    let values = form_values(form);
    info!("POST /api/grade/{} - request: {:?}", student_id, values);

    match state.student_service.get_student(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return ServiceError::StudentNotFound.into_response(),
        Err(e) => return e.into_response(),
    }

    if let Some(response) = validate_request(&form_rules(), &values) {
        return response;
    }
    let value = match require_integer(&values, "value") {
        Ok(value) => value,
        Err(violations) => return violations.into_response(),
    };
    let subject = match require_text(&values, "subject") {
        Ok(subject) => subject,
        Err(violations) => return violations.into_response(),
    };

    let command = CreateGradeCommand {
        student_id,
        value,
        subject,
    };
    match state.grade_service.create_grade(command).await {
        Ok(result) => json_response(&GradeMapper::to_dto(&result), StatusCode::CREATED),
        Err(e) => e.into_response(),
    }
}

/// Average of one student's grades
pub async fn student_average(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Some(student_id) = path_id(path) else {
        return ServiceError::StudentNotFound.into_response();
    };
    info!("GET /api/average-student/{}", student_id);

    match state.grade_service.student_average(student_id).await {
        Ok(result) => json_response(&GradeMapper::to_average_dto(&result), StatusCode::OK),
        Err(e) => e.into_response(),
    }
}

/// Average of every grade
pub async fn class_average(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/average-class");

    match state.grade_service.class_average().await {
        Ok(result) => {
            info!("Class average over {} grade(s)", result.grade_count);
            json_response(&GradeMapper::to_average_dto(&result), StatusCode::OK)
        }
        Err(e) => e.into_response(),
    }
}
