// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides the fixture food dataset, server resources, and router builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `meal_recommendation_server`
//!
//! The fixture dataset is small enough to reason about by hand:
//!
//! | Row | Name          | Diet | Maintain | Gain | Lose |
//! |-----|---------------|------|----------|------|------|
//! | 1   | Oats          | 1    | yes      | yes  | yes  |
//! | 2   | Salad         | 1    | no       | no   | yes  |
//! | 3   | Paneer Tikka  | 1    | no       | yes  | yes  |
//! | 4   | Chicken       | 0    | yes      | yes  | yes  |
//! | 5   | Egg Omelette  | 0    | no       | no   | yes  |
//! | 6   | Chicken       | 0    | no       | yes  | yes  |
//! | 7   | Mystery Stew  | -1   | yes      | yes  | yes  |
//! | 8   | Tofu Bowl     | 1    | yes      | yes  | yes  |

use axum::Router;
use meal_core::models::FoodDataset;
use meal_recommendation_server::{
    config::ServerConfig, dataset::load_dataset_from_reader, resources::ServerResources,
    server::build_router,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Fixture dataset with extra pass-through columns and every imputation case
pub const FIXTURE_CSV: &str = "\
Food_items,Breakfast,Lunch,Dinner,Veg/NonVeg,BMI_Range,Sugars,Calories,Proteins,Fats,Carbohydrates,Iron,Fibre
Oats,1,1,0,1,3,2,350,20,15,45,4.5,10
Salad,0,1,0,1,2,,120,3,2,10,1.2,
Paneer Tikka,0,0,1,1,Unknown,1,420,26,21,12,0.5,0
Chicken,0,1,1,0,4,0,330,22,12,45,1.0,0
Egg Omelette,1,0,0,0,2,1,150,12,11,2,1.8,0
Chicken,0,0,1,0,3,0,500,40,25,0,1.3,0
Mystery Stew,0,0,1,,1,3,350,20,15,45,2,2
Tofu Bowl,0,1,0,1,3,4,380,18,12,55,3,6
";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parse the fixture dataset
pub fn fixture_dataset() -> FoodDataset {
    load_dataset_from_reader(FIXTURE_CSV.as_bytes()).expect("fixture dataset must load")
}

/// Configuration with defaults and the requested error status mode
pub fn test_config(legacy_error_status: bool) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.api.legacy_error_status = legacy_error_status;
    config
}

/// Resources over the fixture dataset
pub fn create_test_server_resources(legacy_error_status: bool) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        test_config(legacy_error_status),
        fixture_dataset(),
    ))
}

/// Full application router (all routes and layers) over the fixture dataset
pub fn create_test_router(legacy_error_status: bool) -> Router {
    build_router(&create_test_server_resources(legacy_error_status))
}
