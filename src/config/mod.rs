// ABOUTME: Configuration module for the meal recommendation server
// ABOUTME: Environment-driven server settings; nutrition constants live in meal-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration management
pub mod environment;

pub use environment::{
    ApiConfig, CorsConfig, DatasetConfig, Environment, LogLevel, ServerConfig,
};
