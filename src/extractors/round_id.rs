//! Round id extracted from the route path parameter.
//!
//! Parse failures map to 404: a path segment that is not an integer
//! cannot name a stored round, and 400 is reserved for payload problems.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Round ID extracted from the `{round_id}` path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundId(pub i64);

impl FromRequest for RoundId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<RoundId, AppError> {
    let raw = req
        .match_info()
        .get("round_id")
        .ok_or_else(|| AppError::internal("round_id parameter missing from route"))?;

    raw.parse::<i64>().map(RoundId).map_err(|_| {
        AppError::not_found(ErrorCode::RoundNotFound, format!("Round {raw} not found"))
    })
}
