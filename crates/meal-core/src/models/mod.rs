// ABOUTME: Core data models for the meal recommendation service
// ABOUTME: Re-exports dietary profile, food row, and dataset types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food rows, nutrient values, and the immutable dataset handle
pub mod food;
/// Dietary profile and the fixed-width parameter decoder
pub mod profile;

pub use food::{FoodDataset, FoodItem, MealSlot, Nutrients};
pub use profile::{decode_params, DietaryProfile, Gender};
