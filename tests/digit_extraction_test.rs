// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit extraction against published hex digits of π.

mod common;

use common::{engine_with_capacity, PI_HEX_DIGITS};
use pi_hex::bbp::{extract_digit, fractional_part, series_sum};
use pi_hex::DigitEngine;
use proptest::prelude::*;

#[test]
fn test_index_zero_is_two() {
    // π = 3.243F6A88...
    assert_eq!(extract_digit(0).value(), 2);
}

#[test]
fn test_published_table() {
    let computed: String = (0..PI_HEX_DIGITS.len() as u64)
        .map(|index| extract_digit(index).to_char())
        .collect();
    assert_eq!(computed, PI_HEX_DIGITS);
}

#[test]
fn test_engine_agrees_with_extractor() {
    let mut engine = engine_with_capacity(PI_HEX_DIGITS.len());
    for (index, expected) in PI_HEX_DIGITS.chars().enumerate() {
        let digit = engine.get_digit(index as i64).unwrap();
        assert_eq!(digit.to_char(), expected, "index {}", index);
        assert_eq!(digit, extract_digit(index as u64));
    }
}

#[test]
fn test_digit_is_truncated_fraction() {
    for index in [0u64, 7, 31, 150] {
        let fraction = fractional_part(series_sum(index));
        assert!((0.0..1.0).contains(&fraction));
        assert_eq!(u32::from(extract_digit(index).value()), (fraction * 16.0) as u32);
    }
}

proptest! {
    #[test]
    fn prop_digit_in_range(index in 0u64..400) {
        prop_assert!(extract_digit(index).value() <= 15);
    }

    #[test]
    fn prop_extraction_is_deterministic(index in 0u64..400) {
        prop_assert_eq!(extract_digit(index), extract_digit(index));
    }
}
