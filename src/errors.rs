use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Configuration not found for scenario: {0}")]
    ConfigMissing(String),

    #[error("Completion request failed: {0}")]
    CompletionFailure(String),

    #[error("Quiz parse error: {0}")]
    ParseFailure(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Generation already in progress: {0}")]
    Busy(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ConfigMissing(_) => "CONFIG_MISSING",
            AppError::CompletionFailure(_) => "COMPLETION_FAILURE",
            AppError::ParseFailure(_) => "PARSE_FAILURE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::Busy(_) => "BUSY",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConfigMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CompletionFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::ParseFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Busy(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::CompletionFailure(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
