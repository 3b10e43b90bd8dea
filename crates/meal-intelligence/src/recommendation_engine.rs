// ABOUTME: Goal-based meal recommendation engine over the static food dataset
// ABOUTME: Selects rows by diet, labels meal slot and BMI range, and applies goal nutrient rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation filter
//!
//! Rows are keyed by food name in the output. When two qualifying rows share
//! a name the later row (in dataset order) replaces the earlier one; the map
//! never holds duplicates and `count` is the number of distinct names.

use meal_core::config::GoalThresholdsConfig;
use meal_core::errors::{AppError, AppResult};
use meal_core::models::{FoodDataset, FoodItem, MealSlot, Nutrients};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Diet selector (matches the dataset's veg/non-veg column)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DietPreference {
    /// Flag 0
    NonVegetarian,
    /// Flag 1
    Vegetarian,
}

impl DietPreference {
    /// Parse a decoded diet flag
    #[must_use]
    pub const fn from_flag(flag: i32) -> Option<Self> {
        match flag {
            0 => Some(Self::NonVegetarian),
            1 => Some(Self::Vegetarian),
            _ => None,
        }
    }

    /// Dataset value this preference selects
    #[must_use]
    pub const fn flag(&self) -> i64 {
        match self {
            Self::NonVegetarian => 0,
            Self::Vegetarian => 1,
        }
    }
}

/// Intent that selects the nutrient threshold rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    /// Goal 0: every nutrient inside its closed range
    Maintain,
    /// Goal 1: any nutrient above its upper bound
    Gain,
    /// Goal 2: any nutrient below its lower bound
    Lose,
}

impl NutritionGoal {
    /// Parse a decoded goal code
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Maintain),
            1 => Some(Self::Gain),
            2 => Some(Self::Lose),
            _ => None,
        }
    }

    /// Whether a row's nutrients satisfy this goal's rule
    #[must_use]
    pub fn qualifies(&self, nutrients: &Nutrients, thresholds: &GoalThresholdsConfig) -> bool {
        let values = nutrients.as_array();
        match self {
            Self::Gain => values
                .iter()
                .zip(thresholds.gain_upper.as_array())
                .any(|(value, upper)| *value > upper),
            Self::Lose => values
                .iter()
                .zip(thresholds.lose_lower.as_array())
                .any(|(value, lower)| *value < lower),
            Self::Maintain => values
                .iter()
                .zip(thresholds.maintain_min.as_array())
                .zip(thresholds.maintain_max.as_array())
                .all(|((value, lower), upper)| lower <= *value && *value <= upper),
        }
    }
}

/// A qualifying dataset row as returned to clients
///
/// Field names follow the dataset's column names so pass-through columns and
/// known columns read the same way in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedMeal {
    /// Derived meal slot
    #[serde(rename = "Meal")]
    pub meal: MealSlot,
    /// Veg/non-veg classification
    #[serde(rename = "Veg/NonVeg")]
    pub veg_non_veg: i64,
    /// BMI range display label
    #[serde(rename = "BMI_Range")]
    pub bmi_range: String,
    /// Sugar content
    #[serde(rename = "Sugars")]
    pub sugars: Option<f64>,
    /// Energy (kcal)
    #[serde(rename = "Calories")]
    pub calories: f64,
    /// Protein (g)
    #[serde(rename = "Proteins")]
    pub proteins: f64,
    /// Fat (g)
    #[serde(rename = "Fats")]
    pub fats: f64,
    /// Carbohydrates (g)
    #[serde(rename = "Carbohydrates")]
    pub carbohydrates: f64,
    /// Remaining dataset columns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<&FoodItem> for RecommendedMeal {
    fn from(item: &FoodItem) -> Self {
        Self {
            meal: item.meal_slot(),
            veg_non_veg: item.veg_non_veg,
            bmi_range: item.bmi_label().to_owned(),
            sugars: item.sugars,
            calories: item.nutrients.calories,
            proteins: item.nutrients.proteins,
            fats: item.nutrients.fats,
            carbohydrates: item.nutrients.carbohydrates,
            extra: item.extra.clone(),
        }
    }
}

/// Filter output: distinct food names and their enriched rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Number of distinct qualifying food names
    pub count: usize,
    /// Qualifying rows keyed by food name
    pub meals: BTreeMap<String, RecommendedMeal>,
}

/// Select and label the rows matching a diet flag and goal code
///
/// # Errors
///
/// Returns `InvalidSelector` if `diet_flag` is not 0/1 or `goal_code` is not 0/1/2
pub fn recommend_meals(
    dataset: &FoodDataset,
    diet_flag: i32,
    goal_code: i32,
    thresholds: &GoalThresholdsConfig,
) -> AppResult<RecommendationResult> {
    let (Some(diet), Some(goal)) = (
        DietPreference::from_flag(diet_flag),
        NutritionGoal::from_code(goal_code),
    ) else {
        return Err(AppError::invalid_selector());
    };

    let mut meals = BTreeMap::new();
    let mut selected = 0_usize;

    for item in dataset
        .items()
        .iter()
        .filter(|item| item.veg_non_veg == diet.flag())
    {
        selected += 1;
        if goal.qualifies(&item.nutrients, thresholds) {
            meals.insert(item.name.clone(), RecommendedMeal::from(item));
        }
    }

    debug!(
        diet = ?diet,
        goal = ?goal,
        selected,
        qualifying = meals.len(),
        "Applied goal rule to diet selection"
    );

    Ok(RecommendationResult {
        count: meals.len(),
        meals,
    })
}
