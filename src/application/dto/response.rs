//! Response DTOs
//!
//! The uniform envelope every endpoint answers with.

use serde::Serialize;

/// Envelope status marker.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform response envelope.
///
/// Exactly one of `data` / `errors` is meaningful, selected by `status`.
/// Both keys are always present in the JSON body, `null` when unused.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<Vec<ErrorDetail>>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>, errors: Vec<ErrorDetail>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a payload (`data: null`).
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
            errors: None,
        }
    }
}

/// A single error entry in an error envelope.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}
