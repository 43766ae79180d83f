// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Message shown to callers whenever the places provider fails
pub const PROVIDER_FAILURE_MESSAGE: &str = "카카오 API 호출 실패";

/// Application-specific error types
/// DOCUMENTATION: Provider failures are the only distinguished kind;
/// the detail string is logged, never returned to the caller
#[derive(Error, Debug)]
pub enum LunchError {
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LunchError {
    /// Message placed in the `error` field of the response body
    pub fn public_message(&self) -> String {
        match self {
            LunchError::Provider(_) => PROVIDER_FAILURE_MESSAGE.to_string(),
            LunchError::InvalidInput(msg) => msg.clone(),
        }
    }
}

/// Convert LunchError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and `{ "error": ... }` bodies
impl ResponseError for LunchError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.public_message()
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LunchError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LunchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}
