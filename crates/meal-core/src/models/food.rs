// ABOUTME: Food dataset models for goal-based meal recommendations
// ABOUTME: FoodItem rows, Nutrients, MealSlot labels, and the shared FoodDataset handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::bmi_labels;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The four nutrients every goal rule is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub proteins: f64,
    /// Fat (g)
    pub fats: f64,
    /// Carbohydrates (g)
    pub carbohydrates: f64,
}

impl Nutrients {
    /// Create a nutrient set
    #[must_use]
    pub const fn new(calories: f64, proteins: f64, fats: f64, carbohydrates: f64) -> Self {
        Self {
            calories,
            proteins,
            fats,
            carbohydrates,
        }
    }

    /// Values in rule order: calories, proteins, fats, carbohydrates
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.calories, self.proteins, self.fats, self.carbohydrates]
    }
}

/// Meal slot label derived from a row's slot indicators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
}

impl MealSlot {
    /// Resolve the slot with fixed priority: breakfast, then lunch, then dinner
    ///
    /// A row flagged for several slots is only ever reported under the first.
    #[must_use]
    pub const fn from_indicators(breakfast: bool, lunch: bool) -> Self {
        if breakfast {
            Self::Breakfast
        } else if lunch {
            Self::Lunch
        } else {
            Self::Dinner
        }
    }

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

/// A single row of the food dataset, validated at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name (output map key)
    pub name: String,
    /// Breakfast indicator
    pub breakfast: bool,
    /// Lunch indicator
    pub lunch: bool,
    /// Dinner indicator
    pub dinner: bool,
    /// 1 = vegetarian, 0 = non-vegetarian, -1 = unknown
    pub veg_non_veg: i64,
    /// BMI range category code (already imputed)
    pub bmi_range: i64,
    /// Sugar content, `None` only when the whole column is empty
    pub sugars: Option<f64>,
    /// Goal rule nutrients
    pub nutrients: Nutrients,
    /// Additional dataset columns, emitted verbatim
    pub extra: Map<String, Value>,
}

impl FoodItem {
    /// Derived meal slot
    #[must_use]
    pub const fn meal_slot(&self) -> MealSlot {
        MealSlot::from_indicators(self.breakfast, self.lunch)
    }

    /// Display label for the row's BMI range code
    #[must_use]
    pub const fn bmi_label(&self) -> &'static str {
        bmi_label(self.bmi_range)
    }
}

/// Map a BMI range code to its display label
#[must_use]
pub const fn bmi_label(code: i64) -> &'static str {
    match code {
        1 => bmi_labels::UNDERWEIGHT,
        2 => bmi_labels::NORMAL,
        3 => bmi_labels::HEALTHY,
        4 => bmi_labels::OVERWEIGHT,
        _ => bmi_labels::UNKNOWN,
    }
}

/// Immutable, process-wide food dataset
///
/// Built once at startup and shared behind an `Arc`; there is no mutation API.
#[derive(Debug, Clone, Default)]
pub struct FoodDataset {
    items: Vec<FoodItem>,
    columns: Vec<String>,
}

impl FoodDataset {
    /// Wrap validated rows together with the header they were read from
    #[must_use]
    pub const fn new(items: Vec<FoodItem>, columns: Vec<String>) -> Self {
        Self { items, columns }
    }

    /// Rows in file order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Header columns in file order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the dataset has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
