// ABOUTME: Core numerology numbers derived from a birth date, a name, or today's date
// ABOUTME: Life path, expression, soul urge, personality, maturity, attitude, day and cycle numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Core Numbers
//!
//! Every function here is pure. Date-based numbers take a [`NaiveDate`]; the
//! cycle numbers ([`universal_day`], [`personal_day`]) take today's date
//! explicitly so that results are reproducible in tests.
//!
//! All results lie in `1..=9` or are one of the master numbers 11, 22, 33.

use chrono::{Datelike, NaiveDate};

use crate::letters::{consonant_sum, letter_sum, vowel_sum};
use crate::reduction::{reduce, year_digit_sum};

/// Life path: month, day and year digit-sum are each reduced with masters
/// preserved, then their total is reduced again.
///
/// `1990-11-22` -> 11 + 22 + reduce(19) = 11 + 22 + 1 = 34 -> 7.
#[must_use]
pub fn life_path(date: NaiveDate) -> u32 {
    let month = reduce(date.month(), true);
    let day = reduce(date.day(), true);
    let year = reduce(year_digit_sum(date.year()), true);
    reduce(month + day + year, true)
}

/// Expression (destiny) number from every letter of the full name
#[must_use]
pub fn expression(name: &str) -> u32 {
    reduce(letter_sum(name), true)
}

/// Soul urge (heart's desire) number from the vowels of the name.
///
/// Y counts as a vowel in a name with no A, E, I, O or U. A name with no
/// vowel at all takes its [`expression`] number instead.
#[must_use]
pub fn soul_urge(name: &str) -> u32 {
    match vowel_sum(name) {
        0 => expression(name),
        sum => reduce(sum, true),
    }
}

/// Personality number from the consonants of the name.
///
/// A name made only of vowels takes its [`expression`] number instead.
#[must_use]
pub fn personality(name: &str) -> u32 {
    match consonant_sum(name) {
        0 => expression(name),
        sum => reduce(sum, true),
    }
}

/// Maturity number
#[must_use]
pub const fn maturity(life_path: u32, expression: u32) -> u32 {
    reduce(life_path + expression, true)
}

/// Attitude number: birth month plus birth day
#[must_use]
pub fn attitude(date: NaiveDate) -> u32 {
    reduce(date.month() + date.day(), true)
}

/// Day-of-birth number
#[must_use]
pub fn day_of_birth(date: NaiveDate) -> u32 {
    reduce(date.day(), true)
}

/// Raw calendar sum shared by the cycle numbers
fn calendar_sum(date: NaiveDate) -> u32 {
    date.month() + date.day() + year_digit_sum(date.year())
}

/// Universal day number for `today`, independent of the person
#[must_use]
pub fn universal_day(today: NaiveDate) -> u32 {
    reduce(calendar_sum(today), true)
}

/// Personal day number for someone born on `birth_date`, evaluated on `today`.
///
/// The calendar term is reduced *without* master preservation before being
/// added to the life path; only the outer sum preserves masters.
#[must_use]
pub fn personal_day(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    reduce(life_path(birth_date) + reduce(calendar_sum(today), false), true)
}

/// One-phrase meaning of a core number, used in prompts and fallback prose
#[must_use]
pub const fn meaning(number: u32) -> &'static str {
    match number {
        1 => "independent leader and pioneer",
        2 => "diplomat and natural peacemaker",
        3 => "creative communicator full of joy",
        4 => "steady builder who values order",
        5 => "freedom-loving adventurer",
        6 => "nurturer devoted to home and service",
        7 => "seeker of inner truth and analysis",
        8 => "ambitious achiever with material mastery",
        9 => "compassionate humanitarian",
        11 => "intuitive visionary and spiritual messenger",
        22 => "master builder of lasting dreams",
        33 => "master teacher of unconditional love",
        _ => "unique vibration",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_life_path_keeps_component_masters() {
        assert_eq!(life_path(date(1990, 11, 22)), 7);
    }

    #[test]
    fn test_life_path_can_end_on_master() {
        // 1 + 8 + reduce(1+9+9+1 = 20 -> 2) = 11
        assert_eq!(life_path(date(1991, 1, 8)), 11);
    }

    #[test]
    fn test_name_numbers_for_john_smith() {
        assert_eq!(expression("John Smith"), 8);
        assert_eq!(soul_urge("John Smith"), 6);
        // consonants sum to 29 -> 11, a master number
        assert_eq!(personality("John Smith"), 11);
    }

    #[test]
    fn test_name_numbers_without_vowels_or_consonants() {
        // Y carries the vowels: 7 + 7 = 14 -> 5, consonants 33 stay a master
        assert_eq!(soul_urge("Lynn Glynn"), 5);
        assert_eq!(personality("Lynn Glynn"), 33);
        // I9 O6 E5 A1 = 21 -> 3 with no consonant to split off
        assert_eq!(personality("Io Ea"), 3);
        assert_eq!(personality("Io Ea"), expression("Io Ea"));
        // B2 R9 R9 = 20 -> 2 with no vowel and no Y
        assert_eq!(soul_urge("Brr"), 2);
    }

    #[test]
    fn test_maturity_attitude_day() {
        assert_eq!(maturity(7, 8), 6);
        assert_eq!(maturity(4, 7), 11);
        assert_eq!(attitude(date(1990, 11, 22)), 33);
        assert_eq!(day_of_birth(date(1990, 11, 22)), 22);
        assert_eq!(day_of_birth(date(1990, 11, 29)), 11);
        assert_eq!(day_of_birth(date(1990, 11, 28)), 1);
    }

    #[test]
    fn test_universal_day() {
        // 10 + 16 + (2+0+2+6 = 10) = 36 -> 9
        assert_eq!(universal_day(date(2026, 10, 16)), 9);
        // 2 + 9 + 2 = 13 -> 4
        assert_eq!(universal_day(date(2000, 2, 9)), 4);
    }

    #[test]
    fn test_personal_day_uses_non_preserving_inner_term() {
        // life path 7, today 2 + 11 + 8 = 21 -> 3, total 10 -> 1
        assert_eq!(personal_day(date(1990, 11, 22), date(2024, 2, 11)), 1);
        // life path 11, today 9 + 18 + 2 = 29 -> 2 (not 11), total 13 -> 4
        assert_eq!(personal_day(date(1991, 1, 8), date(2000, 9, 18)), 4);
    }

    #[test]
    fn test_meaning_fallback() {
        assert_eq!(meaning(7), "seeker of inner truth and analysis");
        assert_eq!(meaning(0), "unique vibration");
    }
}
