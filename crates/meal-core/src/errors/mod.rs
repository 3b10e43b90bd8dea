// ABOUTME: Unified error handling for the meal recommendation service
// ABOUTME: Defines error codes, the AppError type, and the HTTP error body format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure the service can report is an [`AppError`] carrying an
//! [`ErrorCode`]. Request-level codes (malformed parameters, bad selectors,
//! bad activity codes) are recoverable and surface to the caller as an
//! `{"error": "..."}` body. Dataset and configuration codes are only produced
//! during startup and abort the process before the listener is bound.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Request decoding (3000-3999)
    /// Parameter string too short or a numeric slot failed to parse
    #[serde(rename = "MALFORMED_INPUT")]
    MalformedInput = 3000,
    /// Diet flag or goal code outside the accepted domain
    #[serde(rename = "INVALID_SELECTOR")]
    InvalidSelector = 3001,
    /// Activity code outside 1-5
    #[serde(rename = "INVALID_ACTIVITY_CODE")]
    InvalidActivityCode = 3002,

    // Resource Management (4000-4999)
    /// Route or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Dataset file missing, unreadable, or structurally invalid
    #[serde(rename = "DATASET_ERROR")]
    DatasetError = 9002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::MalformedInput | Self::InvalidSelector | Self::InvalidActivityCode => 400,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 500 Internal Server Error
            Self::ConfigInvalid | Self::DatasetError => 500,
        }
    }

    /// Whether this error is caused by the caller's request rather than the server
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput | Self::InvalidSelector | Self::InvalidActivityCode
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MalformedInput => "The parameter string is malformed",
            Self::InvalidSelector => "The diet or goal selector is invalid",
            Self::InvalidActivityCode => "The activity code is outside the supported range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::DatasetError => "The food dataset could not be loaded",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Parameter string could not be decoded
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedInput, message)
    }

    /// Diet flag or goal code outside the accepted domain
    #[must_use]
    pub fn invalid_selector() -> Self {
        Self::new(
            ErrorCode::InvalidSelector,
            "Invalid input for vegetarian/non-vegetarian or goal.",
        )
    }

    /// Activity code outside 1-5
    #[must_use]
    pub fn invalid_activity_code(code: i32) -> Self {
        Self::new(
            ErrorCode::InvalidActivityCode,
            format!("Invalid activity code {code}: expected a value between 1 and 5."),
        )
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Dataset loading failure
    pub fn dataset(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatasetError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
///
/// Clients of the service only ever see the message, keyed by `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                tracing::error!(code = ?self.code, error = %self, "Request failed");
            }
            (status, Json(ErrorResponse::from(self))).into_response()
        }
    }
}
