use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::domain::rounds::ValidationError;
use crate::errors::{DomainError, ErrorCode};
use crate::trace_ctx;

/// JSON body for every error response. `error` is always present;
/// success bodies never carry an `error` field.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<&'static str>>,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {validation}")]
    Validation {
        code: ErrorCode,
        validation: ValidationError,
    },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { validation, .. } => validation.to_string(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// Offending payload fields, present for validation failures only.
    fn fields(&self) -> Option<Vec<&'static str>> {
        match self {
            AppError::Validation { validation, .. } => Some(validation.fields()),
            _ => None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(validation: ValidationError) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationError,
            validation,
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(validation) => AppError::validation(validation),
            DomainError::NotFound(id) => {
                AppError::not_found(ErrorCode::RoundNotFound, format!("Round {id} not found"))
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = trace_ctx::trace_id();

        let body = ErrorBody {
            error: self.detail(),
            code: self.code().to_string(),
            fields: self.fields(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(self.status())
            .insert_header(("x-trace-id", trace_id))
            .json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rounds::{validate, RoundPayload};

    #[test]
    fn domain_not_found_maps_to_404() {
        let err = AppError::from(DomainError::NotFound(999));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), ErrorCode::RoundNotFound);
        assert!(err.detail().contains("999"));
    }

    #[test]
    fn domain_validation_maps_to_400_with_fields() {
        let validation = validate(&RoundPayload::default()).unwrap_err();
        let err = AppError::from(DomainError::Validation(validation));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.fields(), Some(vec!["course", "username", "scores"]));
    }

    #[test]
    fn error_body_serializes_with_error_field() {
        let err = AppError::bad_request(ErrorCode::BadRequest, "Invalid JSON at line 1");
        let body = ErrorBody {
            error: err.detail(),
            code: err.code().to_string(),
            fields: None,
            trace_id: "test".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Invalid JSON at line 1");
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("fields").is_none());
    }
}
