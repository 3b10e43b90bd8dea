// ABOUTME: Nutrition calculation algorithms using peer-reviewed scientific formulas
// ABOUTME: BMR via Mifflin-St Jeor and activity-scaled daily calorie requirement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use meal_core::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use meal_core::constants::ACTIVITY_LEVEL_NAMES;
use meal_core::errors::{AppError, AppResult};
use meal_core::models::{DietaryProfile, Gender};
use serde::{Deserialize, Serialize};

/// Activity level for the daily calorie requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Levels in activity-code order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Map a decoded activity code (1-5) to its level
    ///
    /// # Errors
    ///
    /// Returns `InvalidActivityCode` for any code outside 1-5
    pub fn from_code(code: i32) -> AppResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| AppError::invalid_activity_code(code))
    }

    /// Name used for the activity factor lookup
    #[must_use]
    pub const fn name(&self) -> &'static str {
        ACTIVITY_LEVEL_NAMES[*self as usize]
    }
}

/// Energy requirement derived from a dietary profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Activity level used for scaling
    pub activity_level: ActivityLevel,
    /// Daily calorie requirement (kcal/day)
    pub daily_calories: f64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// No range validation and no clamping; the decoder already guarantees integers.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * age;

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate the daily calorie requirement
///
/// Formula: calories = BMR x activity factor. Unknown activity level names
/// fall back to the sedentary factor instead of failing.
#[must_use]
pub fn calculate_daily_calorie_requirement(
    bmr: f64,
    activity_level: &str,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Estimate BMR and daily calories for a decoded profile
///
/// # Errors
///
/// Returns `InvalidActivityCode` if the profile's activity code is outside 1-5
pub fn estimate_energy(
    profile: &DietaryProfile,
    config: &NutritionConfig,
) -> AppResult<EnergyEstimate> {
    let activity_level = ActivityLevel::from_code(profile.activity_code)?;

    let bmr = calculate_mifflin_st_jeor(
        f64::from(profile.weight_kg),
        f64::from(profile.height_cm),
        f64::from(profile.age_years),
        profile.gender,
        &config.bmr,
    );
    let daily_calories =
        calculate_daily_calorie_requirement(bmr, activity_level.name(), &config.activity_factors);

    Ok(EnergyEstimate {
        bmr,
        activity_level,
        daily_calories,
    })
}
