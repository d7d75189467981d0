use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use chrono::Utc;
use std::collections::BTreeMap;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Business-rule and argument failures are terminal per request and surface
/// as HTTP 400 with the uniform error envelope; constraint conflicts map to
/// 409 and everything else to 500.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Domain-rule violations (invalid date, unknown credit code or customer id)
    #[error("{0}")]
    BusinessRule(String),

    /// Caller passed an argument the domain rejects (ownership mismatch)
    #[error("{0}")]
    InvalidArgument(String),

    /// Unique-constraint violations (duplicate CPF or email)
    #[error("{0}")]
    Conflict(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable kind identifier reported in the `exception` field of the envelope
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BusinessRule(_) => "BusinessRuleViolation",
            AppError::InvalidArgument(_) => "InvalidArgument",
            AppError::Conflict(_) => "DataIntegrityViolation",
            AppError::Database(_) => "DatabaseFailure",
            AppError::Configuration(_) => "ConfigurationFailure",
            AppError::Internal(_) => "InternalFailure",
        }
    }

    fn title(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "Bad Request! Consult the documentation",
            StatusCode::CONFLICT => "Conflict! Consult the documentation",
            _ => "Internal Error! Consult the documentation",
        }
    }

    pub fn business(msg: impl Into<String>) -> Self {
        AppError::BusinessRule(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Never leak driver-level messages to clients
        let cause = match self {
            AppError::Database(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                tracing::error!(kind = self.kind(), error = %self, "request failed");
                "Unexpected server error".to_string()
            }
            other => other.to_string(),
        };

        let mut details = BTreeMap::new();
        details.insert("cause", cause);

        HttpResponse::build(status).json(serde_json::json!({
            "title": self.title(),
            "timestamp": Utc::now(),
            "status": status.as_u16(),
            "exception": self.kind(),
            "details": details,
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BusinessRule(_) | AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
