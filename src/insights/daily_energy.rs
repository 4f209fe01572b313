// ABOUTME: Daily energy forecast record and its gateway operation
// ABOUTME: Combines the profile with today's personal and universal day numbers
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
use crate::llm::prompts::daily_energy_prompt;

/// Structured forecast for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEnergy {
    /// A few words naming the day
    pub theme: String,
    /// What the day feels like
    pub description: String,
    /// Exactly three things to lean into
    pub dos: Vec<String>,
    /// Exactly three things to avoid
    pub donts: Vec<String>,
    /// Where attention pays off
    pub focus_area: String,
    /// First-person affirmation
    pub affirmation: String,
}

impl InsightSchema for DailyEnergy {
    const NAME: &'static str = "daily energy";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::Text("theme"),
        FieldSpec::Text("description"),
        FieldSpec::List("dos", 3),
        FieldSpec::List("donts", 3),
        FieldSpec::Text("focusArea"),
        FieldSpec::Text("affirmation"),
    ];
}

impl InsightGateway {
    /// Daily forecast for a name and birth date, evaluated on `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a name without letters, the fallback model's
    /// error if both models fail, and `SerializationError` or `SchemaMismatch`
    /// if the reply is unusable.
    pub async fn daily_energy(
        &self,
        name: &str,
        birth_date: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<DailyEnergy> {
        let profile = NumerologyProfile::calculate_on(name, birth_date, today)?;
        self.daily_energy_for(&profile, today).await
    }

    /// Daily forecast for a profile computed on `today`
    ///
    /// # Errors
    ///
    /// Same as [`Self::daily_energy`], minus input validation.
    #[instrument(skip(self, profile), fields(personal_day = profile.personal_day))]
    pub async fn daily_energy_for(
        &self,
        profile: &NumerologyProfile,
        today: NaiveDate,
    ) -> AppResult<DailyEnergy> {
        let reply = self.generate(&daily_energy_prompt(profile, today)).await?;
        let energy = parse_insight::<DailyEnergy>(&reply)?;
        info!(theme = %energy.theme, "daily energy generated");
        Ok(energy)
    }
}
