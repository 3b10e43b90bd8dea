// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Dataset column names, parameter string layout, and BMI labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the part of the system that owns them.

/// Column names of the food dataset CSV
pub mod columns {
    /// Unique food name, used as the output map key
    pub const FOOD_ITEMS: &str = "Food_items";
    /// Breakfast slot indicator
    pub const BREAKFAST: &str = "Breakfast";
    /// Lunch slot indicator
    pub const LUNCH: &str = "Lunch";
    /// Dinner slot indicator
    pub const DINNER: &str = "Dinner";
    /// Vegetarian (1) / non-vegetarian (0) classification
    pub const VEG_NON_VEG: &str = "Veg/NonVeg";
    /// Body-mass-index range category code
    pub const BMI_RANGE: &str = "BMI_Range";
    /// Sugar content
    pub const SUGARS: &str = "Sugars";
    /// Energy content (kcal)
    pub const CALORIES: &str = "Calories";
    /// Protein content (g)
    pub const PROTEINS: &str = "Proteins";
    /// Fat content (g)
    pub const FATS: &str = "Fats";
    /// Carbohydrate content (g)
    pub const CARBOHYDRATES: &str = "Carbohydrates";

    /// Columns every dataset must provide
    pub const REQUIRED: [&str; 11] = [
        FOOD_ITEMS,
        BREAKFAST,
        LUNCH,
        DINNER,
        VEG_NON_VEG,
        BMI_RANGE,
        SUGARS,
        CALORIES,
        PROTEINS,
        FATS,
        CARBOHYDRATES,
    ];
}

/// Fixed-width layout of the encoded parameter string
pub mod param_layout {
    /// Gender character offset
    pub const GENDER: usize = 0;
    /// Height slice (3 chars)
    pub const HEIGHT: (usize, usize) = (1, 4);
    /// Age slice (2 chars)
    pub const AGE: (usize, usize) = (4, 6);
    /// Diet flag offset
    pub const DIET: usize = 6;
    /// Activity code offset
    pub const ACTIVITY: usize = 7;
    /// Goal code offset
    pub const GOAL: usize = 8;
    /// Shortest string that covers every fixed slot
    pub const MIN_LENGTH: usize = 9;
    /// Input length that carries a two-digit weight
    pub const SHORT_WEIGHT_LENGTH: usize = 11;
    /// Gender character selecting the female branch
    pub const FEMALE_CODE: char = 'F';
}

/// Display labels for dataset BMI range codes
pub mod bmi_labels {
    /// Code 1
    pub const UNDERWEIGHT: &str = "Underweight";
    /// Code 2
    pub const NORMAL: &str = "Normal";
    /// Code 3
    pub const HEALTHY: &str = "Healthy";
    /// Code 4
    pub const OVERWEIGHT: &str = "Overweight";
    /// Any other code
    pub const UNKNOWN: &str = "Unknown";
}

/// Activity level names in activity-code order (code 1 first)
pub const ACTIVITY_LEVEL_NAMES: [&str; 5] = [
    "sedentary",
    "lightly_active",
    "moderately_active",
    "very_active",
    "extra_active",
];

/// Veg/non-veg value used when the dataset leaves the cell empty
pub const UNKNOWN_DIET_CLASS: i64 = -1;
