//! Error response envelope

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

/// JSON envelope returned on every failure
///
/// `fields` maps a field name (or indexed path such as `family[0].fl_dob`)
/// to a short complaint; it is omitted entirely when there is no field-level
/// detail to report.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `true`
    pub error: bool,
    /// Stable, human-readable message per error kind
    #[schema(example = "validation error")]
    pub message: String,
    /// Optional field-level complaints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            fields: None,
        }
    }

    pub fn with_fields(message: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            fields: Some(fields),
        }
    }
}
