// ABOUTME: Meal plan pipeline from an encoded parameter string to recommended foods
// ABOUTME: Decodes the profile, estimates energy needs, and filters the dataset by diet and goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use meal_core::config::NutritionConfig;
use meal_core::errors::AppResult;
use meal_core::models::{decode_params, FoodDataset};
use meal_intelligence::{estimate_energy, recommend_meals, EnergyEstimate, RecommendationResult};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Response body of `GET /meal/{param}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// `count` and `meals`
    #[serde(flatten)]
    pub recommendations: RecommendationResult,
    /// BMR and daily calorie requirement for the decoded profile
    pub energy: EnergyEstimate,
}

/// Run the full pipeline for one encoded parameter string
///
/// Steps fail in order: malformed string, then activity code, then diet/goal
/// selectors. The energy estimate does not influence which meals are returned.
///
/// # Errors
///
/// Returns `MalformedInput`, `InvalidActivityCode` or `InvalidSelector`
pub fn build_meal_plan(
    raw: &str,
    dataset: &FoodDataset,
    nutrition: &NutritionConfig,
) -> AppResult<MealPlan> {
    let started = Instant::now();

    let profile = decode_params(raw)?;
    let energy = estimate_energy(&profile, nutrition)?;
    let recommendations = recommend_meals(
        dataset,
        profile.diet_flag,
        profile.goal_code,
        &nutrition.goal_thresholds,
    )?;

    AppLogger::log_recommendation(
        profile.diet_flag,
        profile.goal_code,
        energy.daily_calories,
        recommendations.count,
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    );

    Ok(MealPlan {
        recommendations,
        energy,
    })
}
