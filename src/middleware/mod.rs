// ABOUTME: HTTP middleware for the meal recommendation server
// ABOUTME: CORS policy construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing layer
pub mod cors;

pub use cors::setup_cors;
