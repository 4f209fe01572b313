// ABOUTME: Structured insight records and chat operations built on the gateway
// ABOUTME: Personality, compatibility, daily energy, chat and reply parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile-grounded chat with session context and streaming
pub mod chat;
/// Compatibility reading with templated fallback
pub mod compatibility;
/// Daily energy forecast
pub mod daily_energy;
/// JSON cleanup and shape validation
pub mod json;
/// Personality reading
pub mod personality;

pub use chat::{build_chat_context, stateless_chat_prompt, FragmentStream, SessionContext};
pub use compatibility::CompatibilityInsight;
pub use daily_energy::DailyEnergy;
pub use json::{clean_json_response, parse_insight, validate_shape, FieldSpec, InsightSchema};
pub use personality::PersonalityInsight;
