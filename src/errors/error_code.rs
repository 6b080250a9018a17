//! Error codes for the Fairway backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP error bodies. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for the Fairway backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Candidate round failed one or more validation rules
    ValidationError,
    /// No round with the requested id exists
    RoundNotFound,
    /// Request body could not be read or parsed
    BadRequest,
    /// Invalid server configuration
    ConfigError,
    /// Unexpected server-side failure
    InternalError,
}

impl ErrorCode {
    /// Canonical string for this code as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::RoundNotFound => "ROUND_NOT_FOUND",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
