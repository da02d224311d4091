// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hexadecimal digits of π by Bailey–Borwein–Plouffe digit extraction.
//!
//! Any single base-16 digit of π's fractional expansion can be computed on
//! its own, without the digits before it. On top of that sits a small cache
//! that derives two summary values from the leading digits.
//!
//! # Architecture
//!
//! ## Digit extractor ([`bbp`])
//!
//! A pure function from a zero-based index to a [`HexDigit`]. Digit `n`
//! costs O(n²) `f64` operations and is subject to rounding error for large
//! `n` (see the module docs for the accuracy bound).
//!
//! ## Digit engine ([`engine`])
//!
//! [`PiEngine`] owns a fixed-capacity store of digit slots and fills them on
//! demand. It derives:
//! - the violation-magnitude vector: digits 0–2 times a scale factor (14.4
//!   by default), and its Euclidean norm
//! - the determinant of digits 0–8 arranged row-major in a 3×3 matrix
//!   ([`matrix`])
//!
//! ## Reports ([`report`])
//!
//! Text layouts consumed by the `pihex` binary.
//!
//! # References
//!
//! - Bailey, D. H., Borwein, P. B., Plouffe, S. (1997). "On the rapid computation of
//!   various polylogarithmic constants." Mathematics of Computation 66 (218): 903–913.

pub mod bbp;
pub mod engine;
pub mod matrix;
pub mod report;

// Re-export commonly used types
pub use bbp::{extract_digit, HexDigit};
pub use engine::{DigitEngine, EngineConfig, EngineError, PiEngine};
