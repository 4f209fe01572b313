// ABOUTME: Western sun-sign and Chinese zodiac lookups from a birth date
// ABOUTME: Fixed date-range table for western signs, 12/10 cycles for Chinese animal and element
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Western sun sign with its classical element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WesternZodiac {
    /// Sign name, e.g. "Capricorn"
    pub sign: &'static str,
    /// Element, one of Fire, Earth, Air, Water
    pub element: &'static str,
}

impl WesternZodiac {
    /// Returned for a date outside every range
    pub const UNKNOWN: Self = Self {
        sign: "Unknown",
        element: "Unknown",
    };
}

/// Chinese zodiac animal with the heavenly-stem element of the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChineseZodiac {
    /// Animal name, e.g. "Monkey"
    pub animal: &'static str,
    /// Element, one of Metal, Water, Wood, Fire, Earth
    pub element: &'static str,
}

/// `(sign, element, (start month, start day), (end month, end day))`, inclusive
const WESTERN_RANGES: [(&str, &str, (u32, u32), (u32, u32)); 12] = [
    ("Aries", "Fire", (3, 21), (4, 19)),
    ("Taurus", "Earth", (4, 20), (5, 20)),
    ("Gemini", "Air", (5, 21), (6, 20)),
    ("Cancer", "Water", (6, 21), (7, 22)),
    ("Leo", "Fire", (7, 23), (8, 22)),
    ("Virgo", "Earth", (8, 23), (9, 22)),
    ("Libra", "Air", (9, 23), (10, 22)),
    ("Scorpio", "Water", (10, 23), (11, 21)),
    ("Sagittarius", "Fire", (11, 22), (12, 21)),
    ("Capricorn", "Earth", (12, 22), (1, 19)),
    ("Aquarius", "Air", (1, 20), (2, 18)),
    ("Pisces", "Water", (2, 19), (3, 20)),
];

const CHINESE_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

const CHINESE_ELEMENTS: [&str; 10] = [
    "Metal", "Metal", "Water", "Water", "Wood", "Wood", "Fire", "Fire", "Earth", "Earth",
];

/// Western sign for a month/day pair
#[must_use]
pub fn western_zodiac_for(month: u32, day: u32) -> WesternZodiac {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return WesternZodiac::UNKNOWN;
    }
    let key = (month, day);
    WESTERN_RANGES
        .iter()
        .find(|(_, _, start, end)| {
            if start <= end {
                key >= *start && key <= *end
            } else {
                // range wraps over the year end
                key >= *start || key <= *end
            }
        })
        .map_or(WesternZodiac::UNKNOWN, |&(sign, element, _, _)| {
            WesternZodiac { sign, element }
        })
}

/// Western sign for a birth date
#[must_use]
pub fn western_zodiac(date: NaiveDate) -> WesternZodiac {
    western_zodiac_for(date.month(), date.day())
}

/// Chinese animal and element for a calendar year
#[must_use]
pub fn chinese_zodiac_for_year(year: i32) -> ChineseZodiac {
    let animal = (year - 4).rem_euclid(12) as usize;
    let element = year.rem_euclid(10) as usize;
    ChineseZodiac {
        animal: CHINESE_ANIMALS[animal],
        element: CHINESE_ELEMENTS[element],
    }
}

/// Chinese animal and element for a birth date (by Gregorian year)
#[must_use]
pub fn chinese_zodiac(date: NaiveDate) -> ChineseZodiac {
    chinese_zodiac_for_year(date.year())
}
