// ABOUTME: Compatibility reading between two people with a deterministic templated fallback
// ABOUTME: Any remote or parse failure is replaced by prose built from both profiles and the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Compatibility Insight
//!
//! Unlike the personality and daily readings, this operation never surfaces a
//! model failure. Remote errors, empty replies, invalid JSON and schema
//! mismatches all produce [`CompatibilityInsight::fallback`], so the caller
//! gets a well-formed record once both names are valid.

use chrono::NaiveDate;
use numerology_engine::{
    compatibility, meaning, CompatibilityLevel, CompatibilityScore, NumerologyProfile,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::json::{parse_insight, FieldSpec, InsightSchema};
use crate::errors::AppResult;
use crate::gateway::InsightGateway;
use crate::llm::prompts::compatibility_prompt;

/// Structured compatibility reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityInsight {
    /// What draws the two together
    pub overview_narrative: String,
    /// Emotional bond
    pub emotional_connection: String,
    /// How they talk and listen
    pub communication_dynamic: String,
    /// Where the pairing can grow
    pub growth_potential: String,
    /// Shared routines
    pub daily_life_together: String,
    /// One concrete suggestion
    pub advice: String,
}

impl InsightSchema for CompatibilityInsight {
    const NAME: &'static str = "compatibility";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::Text("overviewNarrative"),
        FieldSpec::Text("emotionalConnection"),
        FieldSpec::Text("communicationDynamic"),
        FieldSpec::Text("growthPotential"),
        FieldSpec::Text("dailyLifeTogether"),
        FieldSpec::Text("advice"),
    ];
}

const fn level_advice(level: CompatibilityLevel) -> &'static str {
    match level {
        CompatibilityLevel::SoulmateConnection => {
            "protect the ease you share by still saying out loud what you appreciate"
        }
        CompatibilityLevel::StrongHarmony => {
            "lean on your natural rhythm and give each other room for separate passions"
        }
        CompatibilityLevel::GrowingTogether => {
            "treat your differences as a curriculum and check in often about what each of you needs"
        }
        CompatibilityLevel::KarmicLessons => {
            "move slowly, stay curious about the friction, and let patience do the teaching"
        }
    }
}

impl CompatibilityInsight {
    /// Deterministic reading built from both profiles, the score and the level
    ///
    /// Every field names both people in full.
    #[must_use]
    pub fn fallback(
        first: &NumerologyProfile,
        second: &NumerologyProfile,
        score: &CompatibilityScore,
    ) -> Self {
        let (a, b) = (first.name.as_str(), second.name.as_str());

        Self {
            overview_narrative: format!(
                "{} (Life Path {}, {}) and {} (Life Path {}, {}) share a {} bond with a harmony score of {}/100.",
                first.name,
                first.life_path,
                meaning(first.life_path),
                second.name,
                second.life_path,
                meaning(second.life_path),
                score.level,
                score.score,
            ),
            emotional_connection: format!(
                "{a}'s Soul Urge {} ({}) meets {b}'s Soul Urge {} ({}); naming what each of you needs keeps this connection open.",
                first.soul_urge,
                meaning(first.soul_urge),
                second.soul_urge,
                meaning(second.soul_urge),
            ),
            communication_dynamic: format!(
                "{a} speaks through Expression {} ({}) while {b} speaks through Expression {} ({}); pause to translate before reacting.",
                first.expression,
                meaning(first.expression),
                second.expression,
                meaning(second.expression),
            ),
            growth_potential: format!(
                "{a}'s Maturity {} and {b}'s Maturity {} show where you both are heading; supporting that direction is where this pairing grows.",
                first.maturity, second.maturity,
            ),
            daily_life_together: format!(
                "{a} brings Personality {} and {} {} energy, {b} brings Personality {} and {} {} energy, so shared routines work best when both styles get space.",
                first.personality,
                first.western.element,
                first.chinese.animal,
                second.personality,
                second.western.element,
                second.chinese.animal,
            ),
            advice: format!(
                "With a score of {}, {a} and {b} should {}.",
                score.score,
                level_advice(score.level),
            ),
        }
    }
}

impl InsightGateway {
    /// Compatibility reading for two people
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` only, when either name has no letters.
    pub async fn compatibility_insight(
        &self,
        first: (&str, NaiveDate),
        second: (&str, NaiveDate),
    ) -> AppResult<CompatibilityInsight> {
        let a = NumerologyProfile::calculate(first.0, first.1)?;
        let b = NumerologyProfile::calculate(second.0, second.1)?;
        Ok(self.compatibility_insight_for(&a, &b).await)
    }

    /// Compatibility reading for two precomputed profiles
    ///
    /// Never fails: any model failure yields [`CompatibilityInsight::fallback`].
    #[instrument(skip_all)]
    pub async fn compatibility_insight_for(
        &self,
        first: &NumerologyProfile,
        second: &NumerologyProfile,
    ) -> CompatibilityInsight {
        let score = compatibility(first, second);
        let prompt = compatibility_prompt(first, second, &score);

        let parsed = self
            .generate(&prompt)
            .await
            .and_then(|reply| parse_insight::<CompatibilityInsight>(&reply));

        match parsed {
            Ok(insight) => {
                info!(score = score.score, "compatibility insight generated");
                insight
            }
            Err(e) => {
                warn!(
                    code = ?e.code,
                    error = %e,
                    score = score.score,
                    "compatibility reply unusable, using templated reading"
                );
                CompatibilityInsight::fallback(first, second, &score)
            }
        }
    }
}
