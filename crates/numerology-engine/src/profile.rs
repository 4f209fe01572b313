// ABOUTME: Immutable numerology profile computed from a name, a birth date and today's date
// ABOUTME: Aggregates every core number, zodiac lookup and the energy signature in one record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use numerology_core::{AppError, AppResult};

use crate::energy::energy_signature;
use crate::letters::letter_sum;
use crate::numbers;
use crate::zodiac::{chinese_zodiac, western_zodiac, ChineseZodiac, WesternZodiac};

/// Caller-supplied birth data.
///
/// Birth time and location are accepted for completeness; no calculation uses
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    /// Display name, as free text
    pub name: String,
    /// Calendar birth date
    pub birth_date: NaiveDate,
    /// Optional local birth time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<NaiveTime>,
    /// Optional birth place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_location: Option<String>,
}

impl BirthDetails {
    /// Birth details with only a name and a date
    #[must_use]
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birth_date,
            birth_time: None,
            birth_location: None,
        }
    }
}

/// Full numerology and zodiac profile.
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    /// Display name the profile was derived from
    pub name: String,
    /// Birth date the profile was derived from
    pub birth_date: NaiveDate,
    /// Life path number
    pub life_path: u32,
    /// Expression (destiny) number
    pub expression: u32,
    /// Soul urge number
    pub soul_urge: u32,
    /// Personality number
    pub personality: u32,
    /// Maturity number
    pub maturity: u32,
    /// Attitude number
    pub attitude: u32,
    /// Day-of-birth number
    pub day_of_birth: u32,
    /// Personal day number for the evaluation date
    pub personal_day: u32,
    /// Universal day number for the evaluation date
    pub universal_day: u32,
    /// Western sun sign and element
    pub western: WesternZodiac,
    /// Chinese animal and element
    pub chinese: ChineseZodiac,
    /// Chinese element plus life-path archetype
    pub energy_signature: String,
}

impl NumerologyProfile {
    /// Compute a profile evaluated on the local current date
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `name` contains no letters.
    pub fn calculate(name: &str, birth_date: NaiveDate) -> AppResult<Self> {
        Self::calculate_on(name, birth_date, Local::now().date_naive())
    }

    /// Compute a profile from birth details evaluated on `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name contains no letters.
    pub fn from_details(details: &BirthDetails, today: NaiveDate) -> AppResult<Self> {
        Self::calculate_on(&details.name, details.birth_date, today)
    }

    /// Compute a profile with an explicit evaluation date for the cycle numbers
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `name` contains no letters.
    pub fn calculate_on(name: &str, birth_date: NaiveDate, today: NaiveDate) -> AppResult<Self> {
        let name = name.trim();
        if letter_sum(name) == 0 {
            return Err(AppError::invalid_input(
                "name must contain at least one letter",
            ));
        }

        let life_path = numbers::life_path(birth_date);
        let expression = numbers::expression(name);

        let profile = Self {
            name: name.to_owned(),
            birth_date,
            life_path,
            expression,
            soul_urge: numbers::soul_urge(name),
            personality: numbers::personality(name),
            maturity: numbers::maturity(life_path, expression),
            attitude: numbers::attitude(birth_date),
            day_of_birth: numbers::day_of_birth(birth_date),
            personal_day: numbers::personal_day(birth_date, today),
            universal_day: numbers::universal_day(today),
            western: western_zodiac(birth_date),
            chinese: chinese_zodiac(birth_date),
            energy_signature: energy_signature(birth_date),
        };

        debug!(
            life_path = profile.life_path,
            expression = profile.expression,
            sign = profile.western.sign,
            "computed numerology profile"
        );

        Ok(profile)
    }

    /// First whitespace-separated token of the display name
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
