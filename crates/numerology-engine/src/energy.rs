// ABOUTME: Energy signature label combining the Chinese element with a life-path archetype
// ABOUTME: Fixed lookup table keyed by life path number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;

use crate::numbers::life_path;
use crate::zodiac::chinese_zodiac;

/// Archetype label for a life path number, "Energy" for anything off the table
#[must_use]
pub const fn life_path_label(life_path: u32) -> &'static str {
    match life_path {
        1 => "Fire Initiator",
        2 => "Harmony Weaver",
        3 => "Creative Spark",
        4 => "Earth Builder",
        5 => "Freedom Seeker",
        6 => "Nurturing Heart",
        7 => "Mystic Seeker",
        8 => "Power Manifester",
        9 => "Wise Humanitarian",
        11 => "Intuitive Illuminator",
        22 => "Master Builder",
        33 => "Love Teacher",
        _ => "Energy",
    }
}

/// `"{chinese element} {life path label}"`, e.g. `"Metal Mystic Seeker"`
#[must_use]
pub fn energy_signature(date: NaiveDate) -> String {
    format!(
        "{} {}",
        chinese_zodiac(date).element,
        life_path_label(life_path(date))
    )
}
