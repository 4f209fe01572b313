// ABOUTME: Deterministic compatibility score and level between two numerology profiles
// ABOUTME: Weighs life path, expression, soul urge, western element and Chinese element harmony
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Compatibility Scoring
//!
//! The score is symmetric in its two arguments and always lies in `44..=100`.
//!
//! | Component | identical | related | otherwise |
//! |---|---|---|---|
//! | base | 15 | | |
//! | life path | 30 | 25 (same family) | 10 |
//! | expression | 15 | 10 (same family) | 5 |
//! | soul urge | 15 | 10 (same family) | 5 |
//! | western element | 15 | 12 (Fire/Air, Earth/Water) | 5 |
//! | Chinese element | 10 | 8 (generating cycle) | 4 |
//!
//! Families group root numbers after collapsing masters:
//! `{1, 5, 7}`, `{2, 4, 8}`, `{3, 6, 9}`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::profile::NumerologyProfile;
use crate::reduction::root_digit;

const BASE_SCORE: u32 = 15;

/// Generating (sheng) cycle of the five Chinese elements
const GENERATING_CYCLE: [&str; 5] = ["Wood", "Fire", "Earth", "Metal", "Water"];

/// Qualitative band for a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityLevel {
    /// 85 and above
    #[serde(rename = "Soulmate Connection")]
    SoulmateConnection,
    /// 70 to 84
    #[serde(rename = "Strong Harmony")]
    StrongHarmony,
    /// 55 to 69
    #[serde(rename = "Growing Together")]
    GrowingTogether,
    /// Below 55
    #[serde(rename = "Karmic Lessons")]
    KarmicLessons,
}

impl CompatibilityLevel {
    /// Band a score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 85 {
            Self::SoulmateConnection
        } else if score >= 70 {
            Self::StrongHarmony
        } else if score >= 55 {
            Self::GrowingTogether
        } else {
            Self::KarmicLessons
        }
    }

    /// Display label embedded in prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SoulmateConnection => "Soulmate Connection",
            Self::StrongHarmony => "Strong Harmony",
            Self::GrowingTogether => "Growing Together",
            Self::KarmicLessons => "Karmic Lessons",
        }
    }
}

impl Display for CompatibilityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Numeric compatibility score with its level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    /// Score in `44..=100`
    pub score: u32,
    /// Band the score falls in
    pub level: CompatibilityLevel,
}

/// Harmony family of a core number after collapsing masters
const fn family(n: u32) -> u32 {
    match root_digit(n) {
        1 | 5 | 7 => 0,
        2 | 4 | 8 => 1,
        _ => 2,
    }
}

const fn number_points(a: u32, b: u32, identical: u32, related: u32, other: u32) -> u32 {
    if a == b {
        identical
    } else if family(a) == family(b) {
        related
    } else {
        other
    }
}

fn western_element_points(a: &str, b: &str) -> u32 {
    if a == b {
        return 15;
    }
    match (a, b) {
        ("Fire", "Air") | ("Air", "Fire") | ("Earth", "Water") | ("Water", "Earth") => 12,
        _ => 5,
    }
}

fn chinese_element_points(a: &str, b: &str) -> u32 {
    if a == b {
        return 10;
    }
    let position = |element: &str| GENERATING_CYCLE.iter().position(|e| *e == element);
    match (position(a), position(b)) {
        (Some(i), Some(j)) if (i + 1) % 5 == j || (j + 1) % 5 == i => 8,
        _ => 4,
    }
}

/// Score the compatibility of two profiles
#[must_use]
pub fn compatibility(a: &NumerologyProfile, b: &NumerologyProfile) -> CompatibilityScore {
    let score = BASE_SCORE
        + number_points(a.life_path, b.life_path, 30, 25, 10)
        + number_points(a.expression, b.expression, 15, 10, 5)
        + number_points(a.soul_urge, b.soul_urge, 15, 10, 5)
        + western_element_points(a.western.element, b.western.element)
        + chinese_element_points(a.chinese.element, b.chinese.element);

    CompatibilityScore {
        score,
        level: CompatibilityLevel::from_score(score),
    }
}
