// ABOUTME: Prompt builder for the two-person compatibility reading
// ABOUTME: Embeds both profiles with the deterministic score and level as private context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use numerology_engine::{CompatibilityScore, NumerologyProfile};

use super::{profile_lines, INSIGHT_RULES};

const EXAMPLE: &str = r#"{
  "overviewNarrative": "string, at most 90 words",
  "emotionalConnection": "string, at most 60 words",
  "communicationDynamic": "string, at most 60 words",
  "growthPotential": "string, at most 60 words",
  "dailyLifeTogether": "string, at most 60 words",
  "advice": "string, at most 50 words"
}"#;

/// Build the compatibility insight prompt for two people
#[must_use]
pub fn compatibility_prompt(
    first: &NumerologyProfile,
    second: &NumerologyProfile,
    score: &CompatibilityScore,
) -> String {
    format!(
        "You are an insightful numerologist describing the bond between {a} and {b}.\n\
         \n\
         PRIVATE PROFILE OF {a_upper} (background only, never quote):\n\
         {a_profile}\
         \n\
         PRIVATE PROFILE OF {b_upper} (background only, never quote):\n\
         {b_profile}\
         \n\
         HARMONY: {score}/100, {level}. Let this set the tone; never state it.\n\
         \n\
         TASK\n\
         Address both people together as \"you two\".\n\
         - overviewNarrative: at most 90 words on what draws {a_first} and {b_first} together.\n\
         - emotionalConnection: at most 60 words.\n\
         - communicationDynamic: at most 60 words.\n\
         - growthPotential: at most 60 words.\n\
         - dailyLifeTogether: at most 60 words.\n\
         - advice: one concrete suggestion, at most 50 words.\n\
         \n\
         {rules}\n\
         EXAMPLE SHAPE\n\
         {EXAMPLE}\n",
        a = first.name,
        b = second.name,
        a_upper = first.name.to_uppercase(),
        b_upper = second.name.to_uppercase(),
        a_first = first.first_name(),
        b_first = second.first_name(),
        a_profile = profile_lines(first, "  "),
        b_profile = profile_lines(second, "  "),
        score = score.score,
        level = score.level,
        rules = INSIGHT_RULES,
    )
}
