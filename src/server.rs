// ABOUTME: HTTP server assembly and runtime for the meal recommendation API
// ABOUTME: Merges routes, applies tracing, request-id and CORS layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, MealRoutes};
use anyhow::{Context, Result};
use axum::http::Uri;
use axum::Router;
use meal_core::errors::AppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Meal recommendation HTTP server
pub struct MealServer {
    resources: Arc<ServerResources>,
}

impl MealServer {
    /// Create a server over already-loaded resources
    #[must_use]
    pub fn new(resources: ServerResources) -> Self {
        Self {
            resources: Arc::new(resources),
        }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(&self.resources)
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;

        info!("HTTP server listening on http://{}", address);
        self.serve(listener).await
    }

    /// Serve on an existing listener until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while running
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Assemble routes and middleware around shared resources
///
/// Layers run outermost first: request id assignment, request tracing,
/// request id propagation to the response, then CORS.
#[must_use]
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(MealRoutes::routes(Arc::clone(resources)))
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .fallback(handle_not_found)
        .layer(setup_cors(&resources.config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
