// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bailey–Borwein–Plouffe digit extraction.
//!
//! Computes the hexadecimal digit of π's fractional expansion at a given
//! zero-based index without computing any of the preceding digits:
//!
//! ```text
//! s = Σ_{k=0}^{n} [ 4·r(n-k, 8k+1)/(8k+1) − 2·r(n-k, 8k+4)/(8k+4)
//!                   − r(n-k, 8k+5)/(8k+5) − r(n-k, 8k+6)/(8k+6) ]
//! digit(n) = ⌊16 · frac(s)⌋
//! ```
//!
//! where `r(e, m)` is 16^e mod m. The tail of the series (k > n) is dropped.
//!
//! # Cost
//!
//! `r(e, m)` is computed by `e` sequential multiply-and-mod steps rather than
//! by fast exponentiation, so digit `n` costs O(n²) floating point operations.
//! Nothing is shared between indices; callers that need many digits should go
//! through [`crate::engine::PiEngine`], which caches them.
//!
//! # Accuracy
//!
//! All arithmetic is `f64`. The algorithm is exact in infinite precision, but
//! the sum accumulates rounding error as `n` grows and the truncation to a
//! digit goes wrong once that error moves `frac(s)` across a multiple of 1/16.
//! This is a known accuracy bound, not something corrected here. The results
//! are checked against published hex digits of π for indices 0–199 and at
//! sample positions 1000 and 2000 (see the tests). Beyond [`MAX_EXACT_INDEX`]
//! the modular reduction itself is no longer exact.
//!
//! # Example
//!
//! ```
//! use pi_hex::bbp::extract_digit;
//!
//! // π = 3.243F6A88... in hex
//! assert_eq!(extract_digit(0).value(), 0x2);
//! assert_eq!(extract_digit(3).value(), 0xF);
//! ```

pub mod digit;

pub use digit::HexDigit;

/// Denominator offset and numerator of each of the four series, in summation order.
const SERIES: [(u64, f64); 4] = [(1, 4.0), (4, -2.0), (5, -1.0), (6, -1.0)];

/// Moduli must stay below this for `r * 16.0` to be exact in an `f64` (2^53 / 16).
const MAX_EXACT_MODULUS: u64 = 1 << 49;

/// Largest index for which every modulus `8k + 6` stays below [`MAX_EXACT_MODULUS`].
pub const MAX_EXACT_INDEX: u64 = (MAX_EXACT_MODULUS - 7) / 8;

/// 16^`exponent` mod `modulus`, by repeated multiplication.
///
/// An exponent of 0 returns 1.0 without reducing it.
pub fn pow16_mod(exponent: u64, modulus: f64) -> f64 {
    let mut r = 1.0;
    for _ in 0..exponent {
        r = (r * 16.0) % modulus;
    }
    r
}

/// The unreduced BBP sum for `index`.
pub fn series_sum(index: u64) -> f64 {
    debug_assert!(index <= MAX_EXACT_INDEX, "index {index} beyond exact range");

    let mut s = 0.0;
    for k in 0..=index {
        let exponent = index - k;
        for &(offset, numerator) in &SERIES {
            let modulus = (8 * k + offset) as f64;
            s += numerator * pow16_mod(exponent, modulus) / modulus;
        }
    }
    s
}

/// `s - floor(s)`, normalised into `[0, 1]`.
pub fn fractional_part(s: f64) -> f64 {
    let mut fraction = s - s.floor();
    if fraction < 0.0 {
        fraction += 1.0;
    }
    fraction
}

/// The hex digit of π's fractional part at zero-based `index`.
pub fn extract_digit(index: u64) -> HexDigit {
    // frac() can round up to exactly 1.0 for tiny negative sums; from_fraction saturates.
    HexDigit::from_fraction(fractional_part(series_sum(index)))
}
