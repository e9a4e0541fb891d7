use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Classification of a domain failure, surfaced to callers as `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    /// No entity exists for the given identifier
    NotFound,
    /// Field-level or cross-entity rule violation
    InvalidInput,
    /// Application-level uniqueness violation
    DuplicateEntry,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NotFound => "NOT_FOUND",
            ErrorType::InvalidInput => "INVALID_INPUT",
            ErrorType::DuplicateEntry => "DUPLICATE_ENTRY",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorType::DuplicateEntry => StatusCode::CONFLICT,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error raised by entities and services.
///
/// `details` is only populated for field-level validation failures and maps
/// the field name to the first message recorded for it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[{origin}/{kind}]: {message}{}", details_suffix(.details))]
pub struct DomainError {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub origin: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
}

fn details_suffix(details: &BTreeMap<String, String>) -> String {
    if details.is_empty() {
        return String::new();
    }
    match serde_json::to_string(details) {
        Ok(json) => format!(". Details: {}", json),
        Err(_) => String::new(),
    }
}

impl DomainError {
    pub fn new(kind: ErrorType, origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Aggregated field validation failure
    pub fn validation(origin: impl Into<String>, details: BTreeMap<String, String>) -> Self {
        Self {
            kind: ErrorType::InvalidInput,
            origin: origin.into(),
            message: "Validation failed".to_string(),
            details,
        }
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Domain rule violations (not found, invalid input, duplicates)
    #[error(transparent)]
    Domain(#[from] DomainError),

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

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        match self {
            AppError::Domain(err) => HttpResponse::build(status_code).json(err),
            other => {
                tracing::error!(error = %other, "Unhandled application error");
                HttpResponse::build(status_code).json(serde_json::json!({
                    "error": {
                        "message": "Internal server error",
                        "code": status_code.as_u16(),
                    }
                }))
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(err) => err.kind.status_code(),
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn not_found(origin: impl Into<String>, msg: impl Into<String>) -> Self {
        AppError::Domain(DomainError::new(ErrorType::NotFound, origin, msg))
    }

    pub fn invalid_input(origin: impl Into<String>, msg: impl Into<String>) -> Self {
        AppError::Domain(DomainError::new(ErrorType::InvalidInput, origin, msg))
    }

    pub fn duplicate(origin: impl Into<String>, msg: impl Into<String>) -> Self {
        AppError::Domain(DomainError::new(ErrorType::DuplicateEntry, origin, msg))
    }

    pub fn validation(origin: impl Into<String>, details: BTreeMap<String, String>) -> Self {
        AppError::Domain(DomainError::validation(origin, details))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Surface a unique-index violation as `DUPLICATE_ENTRY`, anything else
    /// as a database error
    pub fn from_write(err: sqlx::Error, origin: &str, duplicate_msg: &str) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::duplicate(origin, duplicate_msg);
            }
        }
        AppError::Database(err)
    }

    /// Domain classification, `None` for infrastructure failures
    pub fn error_type(&self) -> Option<ErrorType> {
        match self {
            AppError::Domain(err) => Some(err.kind),
            _ => None,
        }
    }

    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }

    /// Field details of a validation failure, empty otherwise
    pub fn details(&self) -> Option<&BTreeMap<String, String>> {
        self.domain()
            .map(|err| &err.details)
            .filter(|details| !details.is_empty())
    }
}
