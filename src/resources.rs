// ABOUTME: Shared server resources injected into every route handler
// ABOUTME: Holds the immutable food dataset, nutrition constants, and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use meal_core::config::NutritionConfig;
use meal_core::models::FoodDataset;
use std::sync::Arc;

/// Resources built once at startup and shared read-only across requests
#[derive(Debug, Clone)]
pub struct ServerResources {
    pub config: Arc<ServerConfig>,
    pub dataset: Arc<FoodDataset>,
    pub nutrition: Arc<NutritionConfig>,
}

impl ServerResources {
    /// Bundle a loaded dataset with configuration, using the default nutrition constants
    #[must_use]
    pub fn new(config: ServerConfig, dataset: FoodDataset) -> Self {
        Self::with_nutrition(config, dataset, NutritionConfig::default())
    }

    /// Bundle resources with explicit nutrition constants
    #[must_use]
    pub fn with_nutrition(
        config: ServerConfig,
        dataset: FoodDataset,
        nutrition: NutritionConfig,
    ) -> Self {
        Self {
            config: Arc::new(config),
            dataset: Arc::new(dataset),
            nutrition: Arc::new(nutrition),
        }
    }
}
