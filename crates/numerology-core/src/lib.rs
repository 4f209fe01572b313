// ABOUTME: Core types shared by the numerology engine and the insight gateway
// ABOUTME: Foundation crate with the unified error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Numerology Core
//!
//! Foundation crate for the numerology insights workspace. It changes rarely,
//! so keeping it separate lets the engine and the gateway compile in parallel.

/// Unified error handling system with standard error codes
pub mod errors;

pub use errors::{AppError, AppResult, ErrorCode};
