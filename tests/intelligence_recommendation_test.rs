// ABOUTME: Integration tests for the goal-based recommendation filter
// ABOUTME: Checks diet selection, goal rules, meal labels, and duplicate-name handling on the fixture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use meal_core::config::GoalThresholdsConfig;
use meal_core::errors::ErrorCode;
use meal_core::models::MealSlot;
use meal_intelligence::{recommend_meals, NutritionGoal};

fn thresholds() -> GoalThresholdsConfig {
    GoalThresholdsConfig::default()
}

// ============================================================================
// Selector validation
// ============================================================================

#[test]
fn test_invalid_diet_flag() {
    let dataset = common::fixture_dataset();
    let err = recommend_meals(&dataset, 2, 0, &thresholds()).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidSelector);
    assert_eq!(
        err.message,
        "Invalid input for vegetarian/non-vegetarian or goal."
    );
}

#[test]
fn test_invalid_goal_code() {
    let dataset = common::fixture_dataset();

    for goal in [3, 9, -1] {
        let err = recommend_meals(&dataset, 1, goal, &thresholds()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelector);
    }
}

#[test]
fn test_unknown_diet_class_is_not_a_selector() {
    let dataset = common::fixture_dataset();
    let err = recommend_meals(&dataset, -1, 0, &thresholds()).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidSelector);
}

// ============================================================================
// Goal rules
// ============================================================================

#[test]
fn test_gain_returns_rows_over_any_bound() {
    let dataset = common::fixture_dataset();
    let result = recommend_meals(&dataset, 0, 1, &thresholds()).unwrap();

    assert_eq!(result.count, result.meals.len());
    for meal in result.meals.values() {
        let over = meal.calories > 300.0
            || meal.proteins > 25.0
            || meal.fats > 20.0
            || meal.carbohydrates > 50.0;
        assert!(over);
    }
    assert!(!result.meals.contains_key("Egg Omelette"));
}

#[test]
fn test_maintain_vegetarian() {
    let dataset = common::fixture_dataset();
    let result = recommend_meals(&dataset, 1, 0, &thresholds()).unwrap();

    let names: Vec<&str> = result.meals.keys().map(String::as_str).collect();
    assert_eq!(names, ["Oats", "Tofu Bowl"]);
    assert_eq!(result.count, 2);
}

#[test]
fn test_lose_non_vegetarian() {
    let dataset = common::fixture_dataset();
    let result = recommend_meals(&dataset, 0, 2, &thresholds()).unwrap();

    assert_eq!(result.count, 2);
    assert!(result.meals.contains_key("Chicken"));
    assert!(result.meals.contains_key("Egg Omelette"));
}

#[test]
fn test_rows_with_unknown_diet_never_returned() {
    let dataset = common::fixture_dataset();

    for diet in [0, 1] {
        for goal in [0, 1, 2] {
            let result = recommend_meals(&dataset, diet, goal, &thresholds()).unwrap();
            assert!(!result.meals.contains_key("Mystery Stew"));
            assert!(result.meals.values().all(|meal| meal.veg_non_veg == i64::from(diet)));
        }
    }
}

#[test]
fn test_custom_thresholds_are_honoured() {
    let dataset = common::fixture_dataset();
    let mut custom = thresholds();
    custom.gain_upper.calories = 1000.0;
    custom.gain_upper.proteins = 1000.0;
    custom.gain_upper.fats = 1000.0;
    custom.gain_upper.carbohydrates = 1000.0;

    let result = recommend_meals(&dataset, 1, 1, &custom).unwrap();
    assert_eq!(result.count, 0);
}

#[test]
fn test_goal_codes_map_to_rules() {
    assert_eq!(NutritionGoal::from_code(0), Some(NutritionGoal::Maintain));
    assert_eq!(NutritionGoal::from_code(1), Some(NutritionGoal::Gain));
    assert_eq!(NutritionGoal::from_code(2), Some(NutritionGoal::Lose));
}

// ============================================================================
// Labels and collisions
// ============================================================================

#[test]
fn test_breakfast_wins_over_lunch() {
    let dataset = common::fixture_dataset();
    let result = recommend_meals(&dataset, 1, 0, &thresholds()).unwrap();

    // Oats is flagged for breakfast and lunch
    assert_eq!(result.meals["Oats"].meal, MealSlot::Breakfast);
    assert_eq!(result.meals["Tofu Bowl"].meal, MealSlot::Lunch);
}

#[test]
fn test_dinner_is_the_fallback_slot() {
    let dataset = common::fixture_dataset();
    let result = recommend_meals(&dataset, 1, 1, &thresholds()).unwrap();

    assert_eq!(result.meals["Paneer Tikka"].meal, MealSlot::Dinner);
}

#[test]
fn test_duplicate_names_keep_last_qualifying_row() {
    let dataset = common::fixture_dataset();
    let result = recommend_meals(&dataset, 0, 1, &thresholds()).unwrap();

    // Both Chicken rows qualify for gain; the later row wins
    let chicken = &result.meals["Chicken"];
    assert!((chicken.calories - 500.0).abs() < f64::EPSILON);
    assert_eq!(chicken.bmi_range, "Healthy");
    assert_eq!(result.count, 1);
}

#[test]
fn test_duplicate_names_ignore_non_qualifying_later_row() {
    let dataset = common::fixture_dataset();
    let result = recommend_meals(&dataset, 0, 0, &thresholds()).unwrap();

    // Only the first Chicken row is inside the maintain ranges
    let chicken = &result.meals["Chicken"];
    assert!((chicken.calories - 330.0).abs() < f64::EPSILON);
    assert_eq!(chicken.bmi_range, "Overweight");
}

#[test]
fn test_repeated_calls_are_identical() {
    let dataset = common::fixture_dataset();

    let first = recommend_meals(&dataset, 1, 2, &thresholds()).unwrap();
    let second = recommend_meals(&dataset, 1, 2, &thresholds()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
