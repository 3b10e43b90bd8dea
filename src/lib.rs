// ABOUTME: Main library entry point for the meal recommendation HTTP service
// ABOUTME: Wires configuration, dataset loading, the service layer, and axum routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Recommendation Server
//!
//! An HTTP API that turns a fixed-width encoded profile string into a list of
//! foods from a static nutrition dataset.
//!
//! ## Request flow
//!
//! `GET /meal/{param}` decodes the parameter string into a dietary profile,
//! estimates BMR and daily calories, then filters the dataset by diet flag and
//! by the nutrient rule of the requested goal.
//!
//! ## Architecture
//!
//! - **`meal-core`**: errors, constants, models, the parameter decoder
//! - **`meal-intelligence`**: energy estimation and the recommendation filter
//! - **this crate**: configuration, logging, dataset loading, routes, server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use meal_recommendation_server::config::ServerConfig;
//! use meal_recommendation_server::dataset::load_dataset;
//! use meal_recommendation_server::resources::ServerResources;
//! use meal_recommendation_server::server::MealServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let dataset = load_dataset(&config.dataset.path)?;
//!
//!     MealServer::new(ServerResources::new(config, dataset)).run().await
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Environment variable names, defaults, and fixed API messages
pub mod constants;

/// CSV dataset loading and missing-value imputation
pub mod dataset;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Shared, immutable per-process resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server runtime
pub mod server;

/// Request-level business logic
pub mod services;
