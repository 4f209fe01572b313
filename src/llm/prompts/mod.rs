// ABOUTME: Prompt templates for personality, compatibility, daily energy and chat requests
// ABOUTME: Embeds profiles as private context and demands JSON matching a literal example
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Each builder returns one instruction string. Shared writing rules are
//! loaded at compile time from markdown files for easy maintenance.

use std::fmt::Write as _;

use numerology_engine::{meaning, NumerologyProfile};

mod chat;
mod compatibility;
mod daily_energy;
mod personality;

pub use chat::{chat_prompt, system_context, HISTORY_WINDOW};
pub use compatibility::compatibility_prompt;
pub use daily_energy::daily_energy_prompt;
pub use personality::personality_prompt;

/// Voice, privacy and output-format rules shared by the JSON insight prompts
pub const INSIGHT_RULES: &str = include_str!("insight_rules.md");

/// Conversational rules appended to every chat system context
pub const CHAT_RULES: &str = include_str!("chat_rules.md");

/// Render a profile as labelled lines, each number followed by its gloss
///
/// `indent` is prepended to every line.
#[must_use]
pub fn profile_lines(profile: &NumerologyProfile, indent: &str) -> String {
    let numbers = [
        ("Life Path", profile.life_path),
        ("Expression", profile.expression),
        ("Soul Urge", profile.soul_urge),
        ("Personality", profile.personality),
        ("Maturity", profile.maturity),
        ("Attitude", profile.attitude),
        ("Day of Birth", profile.day_of_birth),
    ];

    let mut out = String::new();
    for (label, value) in numbers {
        // String writes are infallible
        let _ = writeln!(out, "{indent}{label}: {value} ({})", meaning(value));
    }
    let _ = writeln!(
        out,
        "{indent}Western Sign: {} ({} element)",
        profile.western.sign, profile.western.element
    );
    let _ = writeln!(
        out,
        "{indent}Chinese Zodiac: {} {}",
        profile.chinese.element, profile.chinese.animal
    );
    let _ = writeln!(out, "{indent}Energy Signature: {}", profile.energy_signature);
    out
}

/// Render the personal and universal day numbers the profile was computed for
#[must_use]
pub fn cycle_lines(profile: &NumerologyProfile, indent: &str) -> String {
    let mut out = String::new();
    for (label, value) in [
        ("Personal Day", profile.personal_day),
        ("Universal Day", profile.universal_day),
    ] {
        let _ = writeln!(out, "{indent}{label}: {value} ({})", meaning(value));
    }
    out
}
