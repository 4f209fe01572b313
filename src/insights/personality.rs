// ABOUTME: Personality insight record and its gateway operation
// ABOUTME: Prompts the model with a profile and validates the structured reading it returns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use numerology_engine::NumerologyProfile;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::json::{parse_insight, FieldSpec, InsightSchema};
use crate::errors::AppResult;
use crate::gateway::InsightGateway;
use crate::llm::prompts::personality_prompt;

/// Structured personality reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityInsight {
    /// Short portrait
    pub overview: String,
    /// Exactly five strengths
    pub strengths: Vec<String>,
    /// Exactly four challenges
    pub challenges: Vec<String>,
    /// Central lesson
    pub life_lesson: String,
    /// Exactly three career directions
    pub career_paths: Vec<String>,
    /// How the person loves and relates
    pub relationship_style: String,
    /// Exactly three gifts
    pub spiritual_gifts: Vec<String>,
}

impl InsightSchema for PersonalityInsight {
    const NAME: &'static str = "personality";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::Text("overview"),
        FieldSpec::List("strengths", 5),
        FieldSpec::List("challenges", 4),
        FieldSpec::Text("lifeLesson"),
        FieldSpec::List("careerPaths", 3),
        FieldSpec::Text("relationshipStyle"),
        FieldSpec::List("spiritualGifts", 3),
    ];
}

impl InsightGateway {
    /// Personality reading for a name and birth date
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a name without letters, the fallback model's
    /// error if both models fail, and `SerializationError` or `SchemaMismatch`
    /// if the reply is unusable.
    pub async fn personality_insight(
        &self,
        name: &str,
        birth_date: NaiveDate,
    ) -> AppResult<PersonalityInsight> {
        let profile = NumerologyProfile::calculate(name, birth_date)?;
        self.personality_insight_for(&profile).await
    }

    /// Personality reading for a precomputed profile
    ///
    /// # Errors
    ///
    /// Same as [`Self::personality_insight`], minus input validation.
    #[instrument(skip(self, profile), fields(life_path = profile.life_path))]
    pub async fn personality_insight_for(
        &self,
        profile: &NumerologyProfile,
    ) -> AppResult<PersonalityInsight> {
        let reply = self.generate(&personality_prompt(profile)).await?;
        let insight = parse_insight::<PersonalityInsight>(&reply)?;
        info!("personality insight generated");
        Ok(insight)
    }
}
