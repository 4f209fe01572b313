// ABOUTME: Numerology calculator: reduction, letter values, core numbers and zodiac lookups
// ABOUTME: Pure, deterministic functions whose outputs are embedded verbatim into prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Numerology Engine
//!
//! Maps a name and a birth date to a fixed set of integers and categorical
//! tags. Every integer is reduced to a single digit unless an intermediate
//! value is a master number (11, 22, 33), which is kept as-is at every step.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use numerology_engine::NumerologyProfile;
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 11, 22).unwrap();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let profile = NumerologyProfile::calculate_on("John Smith", birth, today).unwrap();
//! assert_eq!(profile.life_path, 7);
//! assert_eq!(profile.expression, 8);
//! ```

/// Compatibility score between two profiles
pub mod compatibility;
/// Energy signature labels
pub mod energy;
/// Letter-to-digit table
pub mod letters;
/// Core numerology numbers
pub mod numbers;
/// Aggregated numerology profile
pub mod profile;
/// Digit-sum reduction
pub mod reduction;
/// Western and Chinese zodiac
pub mod zodiac;

pub use compatibility::{compatibility, CompatibilityLevel, CompatibilityScore};
pub use energy::{energy_signature, life_path_label};
pub use numbers::{
    attitude, day_of_birth, expression, life_path, maturity, meaning, personal_day, personality,
    soul_urge, universal_day,
};
pub use profile::{BirthDetails, NumerologyProfile};
pub use reduction::{digit_sum, is_master, reduce, MASTER_NUMBERS};
pub use zodiac::{
    chinese_zodiac, chinese_zodiac_for_year, western_zodiac, western_zodiac_for, ChineseZodiac,
    WesternZodiac,
};
