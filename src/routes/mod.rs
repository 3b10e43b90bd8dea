// ABOUTME: Route module organization for the meal recommendation HTTP endpoints
// ABOUTME: Groups route definitions by domain; handlers delegate to the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module exposes a `*Routes` type whose `routes` function returns
//! an axum `Router` with its state already applied, so the server only merges.

/// Health check and readiness routes
pub mod health;
/// Welcome and meal recommendation routes
pub mod meals;

pub use health::HealthRoutes;
pub use meals::MealRoutes;
