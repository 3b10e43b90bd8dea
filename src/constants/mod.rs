// ABOUTME: System-wide constants and configuration defaults for the meal recommendation server
// ABOUTME: Environment variable names, default values, service names, and fixed API messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Domain constants (dataset columns, goal thresholds) live in `meal_core::constants`;
//! this module only holds what the server binary needs.

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Dataset CSV path
    pub const DATASET_PATH: &str = "MEAL_DATASET_PATH";
    /// `*` or comma-separated origin list
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Return request errors with status 200
    pub const LEGACY_ERROR_STATUS: &str = "LEGACY_ERROR_STATUS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level / filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Default configuration values
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default bind port
    pub const HTTP_PORT: u16 = 8000;
    /// Default dataset location, relative to the working directory
    pub const DATASET_PATH: &str = "data/data.csv";
    /// Allow every origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}

/// Service names for structured logging
pub mod service_names {
    /// This server
    pub const MEAL_RECOMMENDATION_SERVER: &str = "meal-recommendation-server";
}

/// Fixed API messages
pub mod messages {
    /// Body of `GET /`
    pub const WELCOME: &str = "Welcome to the Meal Recommendation API";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header set on every response
    pub const REQUEST_ID: &str = "x-request-id";
}
