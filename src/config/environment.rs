// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! Configuration comes only from the process environment (optionally seeded
//! from a `.env` file). Values that are present but unparsable are startup
//! errors; absent values fall back to the defaults in [`crate::constants::defaults`].

use crate::constants::{defaults, env_vars, service_names};
use meal_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Food dataset location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// CSV file loaded once at startup
    pub path: PathBuf,
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` for any origin, otherwise a comma-separated origin list
    pub allowed_origins: String,
}

impl CorsConfig {
    /// Whether every origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        let trimmed = self.allowed_origins.trim();
        trimmed.is_empty() || trimmed == "*"
    }
}

/// Response behavior of the public API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Report request errors with status 200 instead of 400
    pub legacy_error_status: bool,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Dataset settings
    pub dataset: DatasetConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// API response settings
    pub api: ApiConfig,
    /// Server name
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            dataset: DatasetConfig {
                path: PathBuf::from(defaults::DATASET_PATH),
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
            api: ApiConfig::default(),
            server_name: service_names::MEAL_RECOMMENDATION_SERVER.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unparsable value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unparsable value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let http_port = match lookup(env_vars::HTTP_PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("{} must be a port number, got '{raw}'", env_vars::HTTP_PORT))
                    .with_source(e)
            })?,
            None => defaults.http_port,
        };

        let legacy_error_status = match lookup(env_vars::LEGACY_ERROR_STATUS) {
            Some(raw) => parse_bool(env_vars::LEGACY_ERROR_STATUS, &raw)?,
            None => defaults.api.legacy_error_status,
        };

        Ok(Self {
            host: lookup(env_vars::HOST).unwrap_or(defaults.host),
            http_port,
            log_level: lookup(env_vars::RUST_LOG)
                .map_or_else(LogLevel::default, |raw| LogLevel::from_str_or_default(&raw)),
            environment: lookup(env_vars::ENVIRONMENT).map_or_else(Environment::default, |raw| {
                Environment::from_str_or_default(&raw)
            }),
            dataset: DatasetConfig {
                path: lookup(env_vars::DATASET_PATH).map_or(defaults.dataset.path, PathBuf::from),
            },
            cors: CorsConfig {
                allowed_origins: lookup(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or(defaults.cors.allowed_origins),
            },
            api: ApiConfig {
                legacy_error_status,
            },
            server_name: defaults.server_name,
            server_version: defaults.server_version,
        })
    }

    /// `host:port` for the TCP listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary logged at startup
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Meal Recommendation Server Configuration:\n\
             - Version: {}\n\
             - Environment: {}\n\
             - Bind Address: {}\n\
             - Log Level: {}\n\
             - Dataset: {}\n\
             - CORS Origins: {}\n\
             - Error Status Mode: {}",
            self.server_version,
            self.environment,
            self.bind_address(),
            self.log_level,
            self.dataset.path.display(),
            if self.cors.allows_any_origin() {
                "any"
            } else {
                self.cors.allowed_origins.as_str()
            },
            if self.api.legacy_error_status {
                "legacy (200)"
            } else {
                "standard (4xx)"
            },
        )
    }
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}
