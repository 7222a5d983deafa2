//! HTTP rendering of domain errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::errors::ServiceError;
use crate::io::rest::mappers::error_mapper::ErrorMapper;
use crate::io::rest::response::{error_response, internal_error_response};

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::StudentNotFound
            | ServiceError::StudentGradeNotFound
            | ServiceError::ClassGradeNotFound => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Storage(e) = &self {
            error!("Storage failure: {:#}", e);
            return internal_error_response();
        }
        error_response(&ErrorMapper::to_dto(&self), self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ServiceError::StudentNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "student_not_found");
        assert_eq!(body["message"], "Student not found.");
    }

    #[tokio::test]
    async fn test_storage_failure_response() {
        let response = ServiceError::Storage(anyhow::anyhow!("pool timed out")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
