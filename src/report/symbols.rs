// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decorative symbols for the design table.

use crate::bbp::HexDigit;

/// One symbol per decimal digit 0–9.
const SYMBOLS: [&str; 10] = ["人", "禾", "火", "衛", "子", "男", "女", "境", "接", "鋭"];

/// Shown for digits 10–15, which have no symbol.
pub const UNKNOWN_SYMBOL: &str = "？";

pub fn digit_symbol(digit: HexDigit) -> &'static str {
    SYMBOLS
        .get(usize::from(digit.value()))
        .copied()
        .unwrap_or(UNKNOWN_SYMBOL)
}
