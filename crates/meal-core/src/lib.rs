// ABOUTME: Core types and constants for the meal recommendation service
// ABOUTME: Foundation crate with error handling, domain models, and nutrition configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Core
//!
//! Foundation crate providing shared types and constants for the meal
//! recommendation service. Nothing in here performs I/O; dataset loading and
//! HTTP plumbing live in the server crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Dataset column names, parameter layout, and BMI labels
//! - **models**: `DietaryProfile`, `FoodItem`, and the immutable `FoodDataset`
//! - **config**: Nutrition formula coefficients and goal threshold configuration

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profiles, food rows, dataset handle)
pub mod models;

/// Nutrition configuration (BMR coefficients, activity factors, goal thresholds)
pub mod config;
