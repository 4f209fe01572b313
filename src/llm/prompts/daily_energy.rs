// ABOUTME: Prompt builder for the daily energy forecast
// ABOUTME: Combines the profile with today's personal and universal day numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use numerology_engine::NumerologyProfile;

use super::{cycle_lines, profile_lines, INSIGHT_RULES};

const EXAMPLE: &str = r#"{
  "theme": "string, at most 6 words",
  "description": "string, at most 70 words",
  "dos": ["string", "string", "string"],
  "donts": ["string", "string", "string"],
  "focusArea": "string, at most 8 words",
  "affirmation": "string, at most 20 words, first person"
}"#;

/// Build the daily energy prompt for `today`
///
/// The profile must have been computed for the same `today`, so its personal
/// and universal day numbers match the date shown.
#[must_use]
pub fn daily_energy_prompt(profile: &NumerologyProfile, today: NaiveDate) -> String {
    format!(
        "You are an insightful numerologist writing {first}'s energy forecast for {date}.\n\
         \n\
         PRIVATE PROFILE (background only, never quote):\n\
         {profile}\
         \n\
         TODAY (background only, never quote):\n\
         {cycle}\
         \n\
         TASK\n\
         Describe how today's energy meets {first}'s nature.\n\
         - theme: at most 6 words.\n\
         - description: at most 70 words.\n\
         - dos: exactly 3 items, each at most 10 words.\n\
         - donts: exactly 3 items, each at most 10 words.\n\
         - focusArea: at most 8 words.\n\
         - affirmation: one sentence in the first person, at most 20 words.\n\
         \n\
         {rules}\n\
         EXAMPLE SHAPE\n\
         {EXAMPLE}\n",
        first = profile.first_name(),
        date = today.format("%A, %B %-d, %Y"),
        profile = profile_lines(profile, "  "),
        cycle = cycle_lines(profile, "  "),
        rules = INSIGHT_RULES,
    )
}
