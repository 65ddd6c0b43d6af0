//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every error leaves the
//! server as an [`ApiResponse`] error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::{ApiResponse, ErrorDetail};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound {
        message: String,
        field: Option<String>,
    },

    #[error("{message}")]
    BadRequest {
        message: String,
        field: Option<String>,
    },

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
            field: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            field: None,
        }
    }

    /// Attach the name of the offending request field.
    pub fn with_field(self, name: impl Into<String>) -> Self {
        match self {
            AppError::NotFound { message, .. } => AppError::NotFound {
                message,
                field: Some(name.into()),
            },
            AppError::BadRequest { message, .. } => AppError::BadRequest {
                message,
                field: Some(name.into()),
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, detail) = match self {
            AppError::NotFound { message, field } => {
                let detail = ErrorDetail { field, message: message.clone() };
                (message, detail)
            }
            AppError::BadRequest { message, field } => {
                let detail = ErrorDetail { field, message: message.clone() };
                (message, detail)
            }
            AppError::MethodNotAllowed(msg) => (msg.clone(), ErrorDetail::new(msg)),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    "Internal server error".to_string(),
                    ErrorDetail::new("An unexpected error occurred"),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    "Internal server error".to_string(),
                    ErrorDetail::new("An unexpected error occurred"),
                )
            }
        };

        let body: ApiResponse<()> = ApiResponse::error(message, vec![detail]);

        (status, Json(body)).into_response()
    }
}
