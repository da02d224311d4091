// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text reports built on top of a [`DigitEngine`].
//!
//! Three layouts are available:
//!
//! - [`standard_report`]: every digit with its violation type, the magnitude
//!   breakdown and the digit matrix with its determinant
//! - [`claim_summary`]: a compact block with the two derived values
//! - [`design_table`]: every digit with its decorative symbol
//!
//! All numbers are formatted with two decimals.

pub mod symbols;

pub use symbols::digit_symbol;

use crate::bbp::HexDigit;
use crate::engine::{DigitEngine, EngineError};
use crate::matrix::Matrix3;
use std::fmt::{self, Write};
use thiserror::Error;

/// Base violation count quoted in the report headers.
pub const BASE_VIOLATIONS: u32 = 216;

/// Labels of the three violation-magnitude components (digits 0, 1, 2).
const COMPONENT_LABELS: [&str; 3] = ["Housing", "Health", "Financial"];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("formatting error: {0}")]
    Format(#[from] fmt::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Digits `0..count`, cached through `compute_range` first.
fn leading_digits<E: DigitEngine>(engine: &mut E, count: usize) -> Result<Vec<HexDigit>> {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    engine.compute_range(0, count - 1);
    (0..count)
        .map(|index| engine.get_digit(index).map_err(ReportError::from))
        .collect()
}

/// The full report: digit listing, magnitude breakdown and matrix determinant.
pub fn standard_report<E: DigitEngine>(engine: &mut E, count: usize) -> Result<String> {
    let scale_factor = engine.scale_factor();
    let mut out = String::new();

    writeln!(out, "----- pihex: hexadecimal digits of π by digit extraction -----")?;
    writeln!(out)?;
    writeln!(out, "[*] Base Violations (S): {}", BASE_VIOLATIONS)?;
    writeln!(out, "[*] Violation Cycles/Year: {:.1}", scale_factor)?;
    writeln!(
        out,
        "[*] Computing π Violation Digits (n=0 to {})...",
        count.saturating_sub(1)
    )?;

    for (index, digit) in leading_digits(engine, count)?.iter().enumerate() {
        writeln!(
            out,
            "n={}: digit={:x} | violation_type={}",
            index,
            digit,
            digit.value() % 3
        )?;
    }

    let magnitude = engine.total_magnitude()?;
    let mut components = [0.0; 3];
    writeln!(out)?;
    writeln!(out, "[*] Compound Magnitude of First 3 Violations:")?;
    for (index, label) in COMPONENT_LABELS.iter().enumerate() {
        let digit = engine.get_digit(index as i64)?;
        components[index] = digit.as_f64() * scale_factor;
        writeln!(
            out,
            "    {}: {:.2} (digit {} * {:.1})",
            label,
            components[index],
            digit.value(),
            scale_factor
        )?;
    }
    let [x, y, z] = components;
    writeln!(
        out,
        "    Vector Magnitude: √({:.2}² + {:.2}² + {:.2}²) = {:.2}",
        x, y, z, magnitude
    )?;

    let determinant = engine.determinant()?;
    let mut digits = [HexDigit::default(); 9];
    for (index, digit) in digits.iter_mut().enumerate() {
        *digit = engine.get_digit(index as i64)?;
    }
    writeln!(out)?;
    writeln!(out, "[*] Matrix M of the First 9 Digits:")?;
    for row in Matrix3::from_digits(&digits).rows() {
        writeln!(out, "    [ {:5.2} {:5.2} {:5.2} ]", row[0], row[1], row[2])?;
    }
    writeln!(out, "[+] Determinant of Matrix M: {:.2}", determinant)?;

    Ok(out)
}

/// Compact summary of the derived values.
pub fn claim_summary<E: DigitEngine>(engine: &mut E) -> Result<String> {
    let scale_factor = engine.scale_factor();
    let magnitude = engine.total_magnitude()?;
    let determinant = engine.determinant()?;

    let mut out = String::new();
    writeln!(
        out,
        "**Base:** {} violations | **Rate:** {:.1}/year",
        BASE_VIOLATIONS, scale_factor
    )?;
    writeln!(
        out,
        "**Magnitude:** {:.2} | **Det(M):** {:.2}",
        magnitude, determinant
    )?;
    Ok(out)
}

/// Each of the first `count` digits with its symbol.
pub fn design_table<E: DigitEngine>(engine: &mut E, count: usize) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "[*] Digit Symbol Table (n=0 to {}):",
        count.saturating_sub(1)
    )?;
    for (index, digit) in leading_digits(engine, count)?.iter().enumerate() {
        writeln!(out, "n={}: digit={:x} | symbol={}", index, digit, digit_symbol(*digit))?;
    }
    Ok(out)
}
