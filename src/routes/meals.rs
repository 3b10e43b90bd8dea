// ABOUTME: Meal recommendation route handlers
// ABOUTME: Serves the welcome message and goal-based meal plans for encoded parameter strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::services::build_meal_plan;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use meal_core::errors::ErrorResponse;
use serde_json::json;
use std::sync::Arc;

/// Meal routes implementation
pub struct MealRoutes;

impl MealRoutes {
    /// Create the welcome and recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_welcome))
            .route("/meal/:param", get(Self::handle_meal_plan))
            .with_state(resources)
    }

    /// Handle GET /
    async fn handle_welcome() -> Json<serde_json::Value> {
        Json(json!({ "message": messages::WELCOME }))
    }

    /// Handle GET /meal/:param
    ///
    /// Request errors become `{"error": ...}` with status 400, or 200 when the
    /// legacy error status mode is enabled.
    async fn handle_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        Path(param): Path<String>,
    ) -> Response {
        match build_meal_plan(&param, &resources.dataset, &resources.nutrition) {
            Ok(plan) => Json(plan).into_response(),
            Err(error) => {
                AppLogger::log_rejected_request("/meal", &error.message);
                if resources.config.api.legacy_error_status && error.code.is_client_error() {
                    (StatusCode::OK, Json(ErrorResponse::from(error))).into_response()
                } else {
                    error.into_response()
                }
            }
        }
    }
}
