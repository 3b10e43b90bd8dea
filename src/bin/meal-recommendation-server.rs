// ABOUTME: Meal recommendation server binary
// ABOUTME: Loads configuration and the food dataset, then serves the HTTP API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Recommendation Server Binary
//!
//! Startup order: configuration, logging, dataset, listener. A dataset that
//! cannot be loaded stops the process before any port is bound.

use anyhow::Result;
use clap::Parser;
use meal_core::errors::AppError;
use meal_recommendation_server::{
    config::ServerConfig,
    dataset::load_dataset,
    logging::{self, AppLogger},
    resources::ServerResources,
    server::MealServer,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "meal-recommendation-server")]
#[command(about = "Meal Recommendation API - goal-based food suggestions from a nutrition dataset")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override dataset CSV path
    #[arg(long)]
    dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(dataset) = args.dataset {
        config.dataset.path = dataset;
    }

    logging::init_from_env()?;

    info!("Starting Meal Recommendation API");
    info!("{}", config.summary());

    let dataset = load_dataset(&config.dataset.path).map_err(|e| {
        let app_error = AppError::from(e);
        error!("Dataset load failed: {}", app_error);
        app_error
    })?;
    AppLogger::log_dataset_loaded(
        &config.dataset.path.display().to_string(),
        dataset.len(),
        dataset.columns().len(),
    );

    let server = MealServer::new(ServerResources::new(config, dataset));

    info!("Available endpoints:");
    info!("  GET /             - Welcome message");
    info!("  GET /meal/{{param}} - Meal recommendations for an encoded profile");
    info!("  GET /health       - Health check");
    info!("  GET /ready        - Readiness check");

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
