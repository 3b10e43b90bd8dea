// ABOUTME: Nutrition intelligence for the meal recommendation service
// ABOUTME: Energy requirement estimation and goal-driven food filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Intelligence
//!
//! Pure algorithms over the types in `meal-core`:
//!
//! - **`nutrition_calculator`**: Mifflin-St Jeor BMR and activity-scaled daily calories
//! - **`recommendation_engine`**: diet selection and goal threshold rules over the food dataset

/// BMR and daily calorie requirement calculations
pub mod nutrition_calculator;

/// Goal-based food filtering
pub mod recommendation_engine;

pub use nutrition_calculator::{
    calculate_daily_calorie_requirement, calculate_mifflin_st_jeor, estimate_energy,
    ActivityLevel, EnergyEstimate,
};
pub use recommendation_engine::{
    recommend_meals, DietPreference, NutritionGoal, RecommendationResult, RecommendedMeal,
};
