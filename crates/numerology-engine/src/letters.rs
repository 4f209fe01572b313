// ABOUTME: Pythagorean letter-to-digit table and name sums
// ABOUTME: Feeds the expression, soul urge and personality numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pythagorean value of an ASCII letter, `None` for anything else.
///
/// ```text
/// 1 2 3 4 5 6 7 8 9
/// A B C D E F G H I
/// J K L M N O P Q R
/// S T U V W X Y Z
/// ```
#[must_use]
pub fn letter_value(c: char) -> Option<u32> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let offset = u32::from(c.to_ascii_uppercase()) - u32::from('A');
    Some(offset % 9 + 1)
}

/// Whether `c` is one of A, E, I, O, U (case-insensitive)
#[must_use]
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Y is a consonant unless the name has no other vowel, as in "Lynn"
fn y_is_vowel(name: &str) -> bool {
    !letters(name).any(is_vowel)
}

fn splits_as_vowel(c: char, y_vowel: bool) -> bool {
    is_vowel(c) || (y_vowel && c.eq_ignore_ascii_case(&'y'))
}

/// Letters of `name` that carry a value, in order
pub fn letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().filter(char::is_ascii_alphabetic)
}

/// Sum of all letter values in `name`
#[must_use]
pub fn letter_sum(name: &str) -> u32 {
    letters(name).filter_map(letter_value).sum()
}

/// Sum of vowel values in `name`, with Y standing in when nothing else does
#[must_use]
pub fn vowel_sum(name: &str) -> u32 {
    let y_vowel = y_is_vowel(name);
    letters(name)
        .filter(|c| splits_as_vowel(*c, y_vowel))
        .filter_map(letter_value)
        .sum()
}

/// Sum of consonant values in `name`, the complement of [`vowel_sum`]
#[must_use]
pub fn consonant_sum(name: &str) -> u32 {
    let y_vowel = y_is_vowel(name);
    letters(name)
        .filter(|c| !splits_as_vowel(*c, y_vowel))
        .filter_map(letter_value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        for (row, value) in ["AJS", "BKT", "CLU", "DMV", "ENW", "FOX", "GPY", "HQZ", "IR"]
            .iter()
            .zip(1..)
        {
            for c in row.chars() {
                assert_eq!(letter_value(c), Some(value), "{c}");
                assert_eq!(letter_value(c.to_ascii_lowercase()), Some(value), "{c}");
            }
        }
    }

    #[test]
    fn test_non_letters_stripped() {
        assert_eq!(letter_value(' '), None);
        assert_eq!(letter_value('-'), None);
        assert_eq!(letter_value('7'), None);
        assert_eq!(letter_sum("J.-o h'n 3"), letter_sum("John"));
    }

    #[test]
    fn test_john_smith_sums() {
        assert_eq!(letter_sum("John Smith"), 44);
        assert_eq!(vowel_sum("John Smith"), 15);
        assert_eq!(consonant_sum("John Smith"), 29);
    }

    #[test]
    fn test_y_is_consonant_next_to_other_vowels() {
        assert!(!is_vowel('y'));
        // M4 A1 R9 Y7
        assert_eq!(vowel_sum("Mary"), 1);
        assert_eq!(consonant_sum("Mary"), 20);
    }

    #[test]
    fn test_y_is_vowel_when_nothing_else_is() {
        // L3 Y7 N5 N5 G7 L3 Y7 N5 N5
        assert_eq!(vowel_sum("Lynn Glynn"), 14);
        assert_eq!(consonant_sum("Lynn Glynn"), 33);
        assert_eq!(
            vowel_sum("Lynn Glynn") + consonant_sum("Lynn Glynn"),
            letter_sum("Lynn Glynn")
        );
    }
}
