// ABOUTME: Nutrition configuration for energy estimation and goal-based food filtering
// ABOUTME: Configures BMR coefficients, activity factors, and per-goal nutrient thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use crate::models::Nutrients;
use serde::{Deserialize, Serialize};

/// Nutrition configuration shared by the estimator and the filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for the daily calorie requirement
    pub activity_factors: ActivityFactorsConfig,
    /// Nutrient thresholds for each goal rule
    pub goal_thresholds: GoalThresholdsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for the daily calorie requirement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Look up a factor by activity level name, falling back to sedentary
    #[must_use]
    pub fn factor_for(&self, activity_level: &str) -> f64 {
        match activity_level {
            "lightly_active" => self.lightly_active,
            "moderately_active" => self.moderately_active,
            "very_active" => self.very_active,
            "extra_active" => self.extra_active,
            _ => self.sedentary,
        }
    }
}

/// Per-goal nutrient thresholds
///
/// Gain and lose rules qualify a row when any single nutrient crosses its
/// bound; the maintain rule requires every nutrient inside its closed range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalThresholdsConfig {
    /// Gain: qualifies if any nutrient is strictly above its bound
    pub gain_upper: Nutrients,
    /// Lose: qualifies if any nutrient is strictly below its bound
    pub lose_lower: Nutrients,
    /// Maintain: inclusive lower bounds
    pub maintain_min: Nutrients,
    /// Maintain: inclusive upper bounds
    pub maintain_max: Nutrients,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for GoalThresholdsConfig {
    fn default() -> Self {
        Self {
            gain_upper: Nutrients::new(300.0, 25.0, 20.0, 50.0),
            lose_lower: Nutrients::new(300.0, 20.0, 10.0, 50.0),
            maintain_min: Nutrients::new(300.0, 15.0, 10.0, 40.0),
            maintain_max: Nutrients::new(400.0, 25.0, 20.0, 60.0),
        }
    }
}
