// ABOUTME: Library entry point for numerology profiles and LLM-generated insights
// ABOUTME: Wires configuration, logging, the provider layer, the gateway and insight operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Numerology Insights
//!
//! Computes a numerology and zodiac profile from a name and birth date and
//! turns it into prompts for a generative model, returning structured
//! readings or free-text chat replies.
//!
//! ## Architecture
//!
//! - **`numerology_engine`**: pure calculator, re-exported as [`engine`]
//! - **Config**: model names and credentials from the environment
//! - **LLM**: provider trait, Gemini over HTTPS and SSE, fallback policy, prompts
//! - **Gateway**: holds the injected provider and model pair
//! - **Insights**: personality, compatibility, daily energy and chat
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use numerology_insights::errors::AppResult;
//! use numerology_insights::gateway::InsightGateway;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let gateway = InsightGateway::from_env()?;
//!     let birth = NaiveDate::from_ymd_opt(1990, 11, 22).unwrap_or_default();
//!     let insight = gateway.personality_insight("John Smith", birth).await?;
//!     println!("{}", insight.overview);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;
/// Error types
pub mod errors;
/// Gateway over the injected provider
pub mod gateway;
/// Insight records and operations
pub mod insights;
/// LLM provider abstraction, Gemini provider and prompts
pub mod llm;
/// Structured logging setup
pub mod logging;

pub use numerology_engine as engine;
