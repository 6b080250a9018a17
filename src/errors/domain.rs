//! Domain-level error type used by the repository layer.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert via the
//! `From<DomainError> for AppError` implementation in `crate::error`.
//!
//! There is deliberately no infra variant: the in-memory store cannot
//! fail operationally. Unexpected boundary failures surface as
//! `AppError::Internal`, never as one of these two kinds.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rounds::{RoundId, ValidationError};

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Candidate record failed one or more validation rules
    Validation(ValidationError),
    /// No round with the given id exists in the collection
    NotFound(RoundId),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(v) => write!(f, "validation error: {v}"),
            DomainError::NotFound(id) => write!(f, "round {id} not found"),
        }
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
