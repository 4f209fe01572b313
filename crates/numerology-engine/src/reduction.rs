// ABOUTME: Digit-sum reduction with master-number preservation
// ABOUTME: The single primitive every numerology derivation is built on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Numbers that are never reduced when master preservation is requested
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Whether `n` is one of the master numbers 11, 22 or 33
#[must_use]
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Sum of the decimal digits of `n`
#[must_use]
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum of the decimal digits of a (possibly negative) calendar year
#[must_use]
pub const fn year_digit_sum(year: i32) -> u32 {
    digit_sum(year.unsigned_abs())
}

/// Reduce `n` by repeated digit sums until it is a single digit.
///
/// With `preserve_master` the check for 11, 22 and 33 happens before every
/// reduction step, so a master number reached at any intermediate stage is
/// returned as-is. Without it, masters reduce like any other number
/// (`29 -> 11 -> 2`).
#[must_use]
pub const fn reduce(mut n: u32, preserve_master: bool) -> u32 {
    while n > 9 {
        if preserve_master && is_master(n) {
            return n;
        }
        n = digit_sum(n);
    }
    n
}

/// Collapse a master number to its root digit (11 -> 2, 22 -> 4, 33 -> 6)
#[must_use]
pub const fn root_digit(n: u32) -> u32 {
    reduce(n, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masters_are_preserved() {
        assert_eq!(reduce(11, true), 11);
        assert_eq!(reduce(22, true), 22);
        assert_eq!(reduce(33, true), 33);
    }

    #[test]
    fn test_intermediate_master_short_circuits() {
        // 29 -> 11, stops when preserving
        assert_eq!(reduce(29, true), 11);
        assert_eq!(reduce(29, false), 2);
        // 994 -> 22
        assert_eq!(reduce(994, true), 22);
        assert_eq!(reduce(994, false), 4);
    }

    #[test]
    fn test_range_holds_for_all_small_inputs() {
        for n in 1..=10_000 {
            let preserved = reduce(n, true);
            assert!(
                (1..=9).contains(&preserved) || is_master(preserved),
                "reduce({n}, true) = {preserved}"
            );
            let plain = reduce(n, false);
            assert!((1..=9).contains(&plain), "reduce({n}, false) = {plain}");
        }
    }

    #[test]
    fn test_single_digits_untouched() {
        for n in 0..=9 {
            assert_eq!(reduce(n, true), n);
            assert_eq!(reduce(n, false), n);
        }
    }

    #[test]
    fn test_year_digit_sum() {
        assert_eq!(year_digit_sum(1990), 19);
        assert_eq!(year_digit_sum(2000), 2);
        assert_eq!(year_digit_sum(-44), 8);
    }

    #[test]
    fn test_root_digit() {
        assert_eq!(root_digit(11), 2);
        assert_eq!(root_digit(22), 4);
        assert_eq!(root_digit(33), 6);
        assert_eq!(root_digit(7), 7);
    }
}
