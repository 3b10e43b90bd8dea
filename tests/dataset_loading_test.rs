// ABOUTME: Integration tests for loading the food dataset from disk
// ABOUTME: Covers imputation rules, pass-through columns, and fatal load errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use meal_core::errors::{AppError, ErrorCode};
use meal_recommendation_server::dataset::{load_dataset, DatasetError};
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Successful loads
// ============================================================================

#[test]
fn test_load_fixture_from_disk() {
    let file = write_csv(common::FIXTURE_CSV);
    let dataset = load_dataset(file.path()).unwrap();

    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.columns().len(), 13);
    assert_eq!(dataset.columns()[0], "Food_items");
}

#[test]
fn test_load_bundled_dataset() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/data.csv");
    let dataset = load_dataset(&path).unwrap();

    assert_eq!(dataset.len(), 40);
    assert_eq!(dataset.columns().len(), 17);
    assert_eq!(dataset.columns().last().map(String::as_str), Some("Sugars"));

    let item = |name: &str| {
        dataset
            .items()
            .iter()
            .find(|item| item.name == name)
            .unwrap_or_else(|| panic!("{name} missing from bundled dataset"))
    };

    // BMI code 3 is the most frequent known code
    assert_eq!(item("Cauliflower").bmi_range, 3);
    assert_eq!(item("Onions").bmi_range, 3);
    assert_eq!(item("Prawns").bmi_range, 3);
    assert_eq!(item("Lentils").veg_non_veg, -1);

    let sugars = item("American cheese").sugars.unwrap();
    assert!((sugars - 224.1 / 37.0).abs() < 1e-6);
    assert_eq!(item("Paneer").sugars, item("Tuna Salad").sugars);

    assert_eq!(item("Bananas").extra["Iron"], serde_json::json!(0.26));
}

#[test]
fn test_unknown_bmi_takes_column_mode() {
    let dataset = common::fixture_dataset();
    let paneer = dataset
        .items()
        .iter()
        .find(|item| item.name == "Paneer Tikka")
        .unwrap();

    // Known codes 3,2,4,2,3,1,3: code 3 is the most frequent
    assert_eq!(paneer.bmi_range, 3);
    assert_eq!(paneer.bmi_label(), "Healthy");
}

#[test]
fn test_blank_sugars_take_column_mean() {
    let dataset = common::fixture_dataset();
    let salad = &dataset.items()[1];

    let expected = (2.0 + 1.0 + 0.0 + 1.0 + 0.0 + 3.0 + 4.0) / 7.0;
    assert!((salad.sugars.unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_blank_diet_class_is_unknown() {
    let dataset = common::fixture_dataset();
    let stew = &dataset.items()[6];

    assert_eq!(stew.name, "Mystery Stew");
    assert_eq!(stew.veg_non_veg, -1);
}

#[test]
fn test_extra_columns_pass_through() {
    let dataset = common::fixture_dataset();
    let oats = &dataset.items()[0];
    let salad = &dataset.items()[1];

    assert_eq!(oats.extra["Iron"], Value::from(4.5));
    assert_eq!(oats.extra["Fibre"], Value::from(10));
    assert_eq!(salad.extra["Fibre"], Value::Null);
    assert!(!oats.extra.contains_key("Calories"));
}

#[test]
fn test_sugars_stay_null_when_column_is_empty() {
    let file = write_csv(
        "Food_items,Breakfast,Lunch,Dinner,Veg/NonVeg,BMI_Range,Sugars,Calories,Proteins,Fats,Carbohydrates\n\
         Water,1,0,0,1,2,,0,0,0,0\n",
    );
    let dataset = load_dataset(file.path()).unwrap();

    assert_eq!(dataset.items()[0].sugars, None);
}

#[test]
fn test_columns_may_appear_in_any_order() {
    let file = write_csv(
        "Calories,Proteins,Fats,Carbohydrates,Sugars,BMI_Range,Veg/NonVeg,Dinner,Lunch,Breakfast,Food_items\n\
         350,20,15,45,2,3,1,1,0,0,Dal\n",
    );
    let dataset = load_dataset(file.path()).unwrap();
    let dal = &dataset.items()[0];

    assert_eq!(dal.name, "Dal");
    assert!(dal.dinner && !dal.lunch && !dal.breakfast);
    assert!((dal.nutrients.calories - 350.0).abs() < f64::EPSILON);
}

// ============================================================================
// Fatal load errors
// ============================================================================

#[test]
fn test_missing_file_is_dataset_error() {
    let err = load_dataset(Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::Open { .. }));

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::DatasetError);
    assert!(app_error.message.contains("/definitely/not/here.csv"));
}

#[test]
fn test_missing_required_column_is_dataset_error() {
    let file = write_csv("Food_items,Breakfast,Lunch,Dinner,Veg/NonVeg,BMI_Range,Sugars,Calories,Proteins,Fats\nTea,1,0,0,1,2,0,2,0,0\n");
    let err = load_dataset(file.path()).unwrap_err();

    assert!(matches!(err, DatasetError::MissingColumn("Carbohydrates")));
}

#[test]
fn test_blank_required_nutrient_is_dataset_error() {
    let file = write_csv(
        "Food_items,Breakfast,Lunch,Dinner,Veg/NonVeg,BMI_Range,Sugars,Calories,Proteins,Fats,Carbohydrates\n\
         Tea,1,0,0,1,2,0,2,,0,0\n",
    );
    let err = load_dataset(file.path()).unwrap_err();

    match err {
        DatasetError::InvalidValue { column, line, .. } => {
            assert_eq!(column, "Proteins");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ragged_rows_are_rejected() {
    let file = write_csv(
        "Food_items,Breakfast,Lunch,Dinner,Veg/NonVeg,BMI_Range,Sugars,Calories,Proteins,Fats,Carbohydrates\n\
         Tea,1,0,0\n",
    );
    let err = load_dataset(file.path()).unwrap_err();

    assert!(matches!(err, DatasetError::Csv(_)));
}
