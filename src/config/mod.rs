// ABOUTME: Configuration module for the insight gateway
// ABOUTME: Reads model identifiers, credentials and provider settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is environment-only. See [`llm`] for the variables read.

/// Model and provider configuration
pub mod llm;

pub use llm::{GatewayConfig, ModelConfig, ProviderConfig};
