//! HTTP handlers
//!
//! This layer is the sole translator from domain error kinds to response
//! status codes; nothing below it encodes HTTP semantics. Messages are fixed
//! per error kind - logged detail never reaches the caller.

pub mod customer;
pub mod nationality;

use axum::http::StatusCode;
use axum::Json;

use crate::dto::error::ErrorResponse;

pub const MSG_INVALID_ID: &str = "invalid id";
pub const MSG_INVALID_JSON: &str = "invalid JSON";
pub const MSG_NOT_FOUND: &str = "not found";
pub const MSG_INTERNAL: &str = "internal error";
pub const MSG_CONFLICT: &str = "conflict";

pub(crate) fn invalid_id() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(MSG_INVALID_ID)),
    )
}

pub(crate) fn invalid_json() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(MSG_INVALID_JSON)),
    )
}

pub(crate) fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(MSG_NOT_FOUND)),
    )
}

pub(crate) fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(MSG_INTERNAL)),
    )
}

/// Parse a path id; zero, negative and non-numeric values are all rejected
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_non_positive_and_non_numeric() {
        assert_eq!(parse_id("125"), Some(125));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("12.5"), None);
    }
}
