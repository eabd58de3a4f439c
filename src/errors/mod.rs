//! Error handling module for the RSVP service.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const INVALID_PASSWORD: &str = "INVALID_PASSWORD";
    pub const ENDPOINT_ERROR: &str = "ENDPOINT_ERROR";
    pub const UPSTREAM_STATUS: &str = "UPSTREAM_STATUS";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const TEMPLATE_ERROR: &str = "TEMPLATE_ERROR";
}

/// The literal the endpoint uses to reject a password.
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password";

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The endpoint rejected the admin password
    InvalidPassword,
    /// The endpoint answered with an `error` string other than the password one
    Endpoint(String),
    /// The endpoint answered with a non-success HTTP status
    UpstreamStatus(u16),
    /// Network failure talking to the endpoint
    Transport(String),
    /// Endpoint body could not be decoded
    MalformedResponse(String),
    /// Invalid configuration value
    Config(String),
    /// Bad request from the browser
    BadRequest(String),
    /// A page template failed to render
    Template(String),
}

impl AppError {
    /// Classify an `error` string returned by the endpoint.
    pub fn from_endpoint_message(message: &str) -> Self {
        if message == INVALID_PASSWORD_MESSAGE {
            AppError::InvalidPassword
        } else {
            AppError::Endpoint(message.to_string())
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AppError::Endpoint(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidPassword => codes::INVALID_PASSWORD,
            AppError::Endpoint(_) => codes::ENDPOINT_ERROR,
            AppError::UpstreamStatus(_) => codes::UPSTREAM_STATUS,
            AppError::Transport(_) => codes::TRANSPORT_ERROR,
            AppError::MalformedResponse(_) => codes::MALFORMED_RESPONSE,
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::Template(_) => codes::TEMPLATE_ERROR,
        }
    }

    /// Get the error message, as shown to the admin user.
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidPassword => INVALID_PASSWORD_MESSAGE.to_string(),
            AppError::Endpoint(msg) => msg.clone(),
            AppError::UpstreamStatus(status) => format!("Server returned {}", status),
            AppError::Transport(msg) => msg.clone(),
            AppError::MalformedResponse(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Template(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Endpoint request error: {:?}", err);
        if err.is_decode() {
            AppError::MalformedResponse(format!("Invalid response from server: {}", err))
        } else {
            AppError::Transport(format!("Failed to reach server: {}", err))
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        tracing::error!("Template error: {:?}", err);
        AppError::Template(format!("Failed to render page: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::MalformedResponse(format!("Invalid response from server: {}", err))
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
