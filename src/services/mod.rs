// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Composes decoding, energy estimation, and meal filtering into one request operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they extract the path, call into this layer with
//! the shared resources, and serialize whatever comes back.

/// Parameter string to meal plan pipeline
pub mod meal_plans;

pub use meal_plans::{build_meal_plan, MealPlan};
