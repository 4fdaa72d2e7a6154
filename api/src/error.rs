//! Error Handling Module
//!
//! Provides type-safe error handling with proper HTTP status code mapping.
//! Uses thiserror for domain errors and integrates with tracing for structured logging.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::ValidationError;

/// API 에러 타입
///
/// 각 variant는 HTTP 상태 코드에 매핑된다.
/// 5xx 에러의 내부 정보는 클라이언트에 노출하지 않음
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ============ 404 Not Found ============
    #[error("Resource not found: {0}")]
    NotFound(String),

    // ============ 500 Internal Server Error ============
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    InternalError,

    // ============ 503 Service Unavailable ============
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// API 에러 응답 구조
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DatabaseError(_) | ApiError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message, details) = match &self {
            // 4xx 클라이언트 에러
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg.clone(), None),
            ApiError::ValidationError(msg) => (
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
                Some(msg.clone()),
            ),
            ApiError::NotFound(resource) => {
                ("NOT_FOUND", format!("{} not found", resource), None)
            }

            // 5xx 서버 에러
            ApiError::DatabaseError(_) => {
                tracing::error!("Database error: {:?}", self);
                (
                    "DATABASE_ERROR",
                    "Database error occurred".to_string(),
                    None,
                )
            }
            ApiError::InternalError => {
                tracing::error!("Internal error: {:?}", self);
                (
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
            ApiError::ServiceUnavailable(service) => (
                "SERVICE_UNAVAILABLE",
                format!("{} is currently unavailable", service),
                None,
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// SQLx 에러를 ApiError로 변환
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("SQLx error: {:?}", err);
        ApiError::DatabaseError(err.to_string())
    }
}

/// anyhow 에러를 ApiError로 변환
///
/// 핸들러는 sqlx/검증 에러만 반환한다. `anyhow::Result`를 쓰는
/// 시작 코드(`Database::connect_lazy`, 마이그레이션)를 핸들러에서 부를 때의
/// catch-all이며 원인은 로그에만 남긴다.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Anyhow error: {:?}", err);
        ApiError::InternalError
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}

// ============ Extractor rejections ============
// axum 기본값(422/415 + text/plain) 대신 400 JSON 응답

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("Loan".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::ValidationError("amount".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ServiceUnavailable("Database".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::InternalError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_hides_details() {
        let err: ApiError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, ApiError::DatabaseError(_)));

        let body = ErrorResponse {
            error: "Database error occurred".to_string(),
            code: "DATABASE_ERROR".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: ApiError = ValidationError::NonPositiveAmount.into();
        assert!(matches!(err, ApiError::ValidationError(ref msg) if msg.contains("amount")));
    }

    #[test]
    fn test_anyhow_error_is_opaque_internal_error() {
        let err: ApiError = anyhow::anyhow!("disk full at /var/lib/loans.db").into();
        assert!(matches!(err, ApiError::InternalError));
        assert!(!err.to_string().contains("disk full"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_status() {
        let err = ApiError::BadRequest("missing field `amount`".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
