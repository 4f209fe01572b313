// ABOUTME: Prompt builder for the personality insight reading
// ABOUTME: Asks for overview, strengths, challenges, life lesson, careers, relationships and gifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use numerology_engine::NumerologyProfile;

use super::{profile_lines, INSIGHT_RULES};

const EXAMPLE: &str = r#"{
  "overview": "string, at most 80 words",
  "strengths": ["string", "string", "string", "string", "string"],
  "challenges": ["string", "string", "string", "string"],
  "lifeLesson": "string, at most 40 words",
  "careerPaths": ["string", "string", "string"],
  "relationshipStyle": "string, at most 50 words",
  "spiritualGifts": ["string", "string", "string"]
}"#;

/// Build the personality insight prompt
#[must_use]
pub fn personality_prompt(profile: &NumerologyProfile) -> String {
    format!(
        "You are an insightful numerologist writing a personal reading for {name}.\n\
         \n\
         PRIVATE PROFILE (background only, never quote):\n\
         {profile}\
         \n\
         TASK\n\
         Describe who {first} is at their core.\n\
         - overview: one paragraph, at most 80 words.\n\
         - strengths: exactly 5 items, each at most 12 words.\n\
         - challenges: exactly 4 items, each at most 12 words.\n\
         - lifeLesson: one sentence, at most 40 words.\n\
         - careerPaths: exactly 3 items, each a short role or field with a reason, at most 15 words.\n\
         - relationshipStyle: at most 50 words.\n\
         - spiritualGifts: exactly 3 items, each at most 12 words.\n\
         \n\
         {rules}\n\
         EXAMPLE SHAPE\n\
         {EXAMPLE}\n",
        name = profile.name,
        first = profile.first_name(),
        profile = profile_lines(profile, "  "),
        rules = INSIGHT_RULES,
    )
}
