// ABOUTME: Error types for the insight gateway, re-exported from the core crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable for gateway modules and callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! See [`numerology_core::errors`] for the error code table.

pub use numerology_core::errors::{AppError, AppResult, ErrorCode};
