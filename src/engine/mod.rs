// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazily computed, cached digit sequence.
//!
//! [`PiEngine`] owns a capacity-bounded store of digit slots. A slot starts
//! out uncomputed and becomes computed the first time its index is requested;
//! it never reverts. Derived artifacts (the violation-magnitude vector and
//! the 3×3 determinant) compute whichever of their prerequisite digits are
//! still missing.
//!
//! # Example
//!
//! ```
//! use pi_hex::engine::{DigitEngine, EngineConfig, PiEngine};
//!
//! let mut engine = PiEngine::new(EngineConfig::new(16)).unwrap();
//! assert_eq!(engine.get_digit(0).unwrap().value(), 2);
//! assert_eq!(engine.determinant().unwrap(), -8.0);
//! assert!(engine.get_digit(16).is_err());
//! ```

pub mod config;
pub mod errors;
pub mod statistics;

pub use config::{EngineConfig, DEFAULT_CAPACITY, VIOLATION_SCALE_FACTOR};
pub use errors::{EngineError, Result};
pub use statistics::{Counters, Statistics};

use crate::bbp::{self, HexDigit};
use crate::matrix::{self, Matrix3, Vector3};
use config::{MAGNITUDE_DIGITS, MATRIX_DIGITS};
use tracing::{debug, trace, warn};

/// The operations a presentation layer consumes from the digit cache.
pub trait DigitEngine {
    /// The digit at `index`, computing and caching it on first request.
    fn get_digit(&mut self, index: i64) -> Result<HexDigit>;

    /// Ensure every digit in `start..=end` (clipped to the capacity) is cached.
    fn compute_range(&mut self, start: i64, end: i64);

    /// √(m0² + m1² + m2²) over the violation magnitudes of digits 0–2.
    fn total_magnitude(&mut self) -> Result<f64>;

    /// Determinant of digits 0–8 arranged row-major in a 3×3 matrix.
    fn determinant(&mut self) -> Result<f64>;

    /// Multiplier applied to digits 0–2 by [`total_magnitude`](Self::total_magnitude).
    fn scale_factor(&self) -> f64;
}

/// Digit cache backed by the BBP extractor.
///
/// All mutation goes through `&mut self`, so a single engine can never have
/// two fills of the same slot in flight.
#[derive(Debug)]
pub struct PiEngine {
    /// One slot per index; `len()` is the capacity and never changes.
    digits: Vec<Option<HexDigit>>,

    /// Count of contiguous computed slots starting at index 0.
    high_water_mark: usize,

    /// `digit[i] * scale_factor` for i in 0..3, zero until computed.
    violation_magnitudes: Vector3,

    /// Last value returned by [`DigitEngine::determinant`].
    determinant: Option<f64>,

    scale_factor: f64,

    statistics: Statistics,
}

impl PiEngine {
    /// Create an engine with `config.capacity` uncomputed slots.
    ///
    /// Fails with [`EngineError::Allocation`] if the slots cannot be reserved.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let capacity = config.capacity;
        let mut digits = Vec::new();
        digits
            .try_reserve_exact(capacity)
            .map_err(|source| EngineError::Allocation { capacity, source })?;
        digits.resize(capacity, None);

        debug!(capacity, scale_factor = config.scale_factor, "created digit engine");

        Ok(Self {
            digits,
            high_water_mark: 0,
            violation_magnitudes: [0.0; MAGNITUDE_DIGITS],
            determinant: None,
            scale_factor: config.scale_factor,
            statistics: Statistics::new(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Number of contiguous digits, from index 0, that are cached.
    ///
    /// A request past the mark extracts only that index, so the mark stays put
    /// until the gap below it is filled.
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    pub fn is_computed(&self, index: usize) -> bool {
        self.computed_digit(index).is_some()
    }

    /// The cached digit at `index`, without computing it.
    pub fn computed_digit(&self, index: usize) -> Option<HexDigit> {
        self.digits.get(index).copied().flatten()
    }

    pub fn violation_magnitudes(&self) -> Vector3 {
        self.violation_magnitudes
    }

    pub fn cached_determinant(&self) -> Option<f64> {
        self.determinant
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Map a requested index onto a slot, rejecting anything outside `0..capacity`.
    fn slot(&mut self, index: i64) -> Result<usize> {
        let capacity = self.capacity();
        match usize::try_from(index) {
            Ok(slot) if slot < capacity => Ok(slot),
            _ => {
                self.statistics.increment_counter(Counters::RejectedIndices);
                warn!(index, capacity, "digit index out of range");
                Err(EngineError::IndexOutOfRange { index, capacity })
            }
        }
    }

    /// Digit in an in-range `slot`, extracting it if it is not cached yet.
    fn fill(&mut self, slot: usize) -> HexDigit {
        if let Some(digit) = self.digits[slot] {
            self.statistics.increment_counter(Counters::CacheHits);
            trace!(index = slot, "digit cache hit");
            return digit;
        }

        let digit = bbp::extract_digit(slot as u64);
        self.digits[slot] = Some(digit);
        self.statistics.increment_counter(Counters::Extractions);

        if let Some(magnitude) = self.violation_magnitudes.get_mut(slot) {
            *magnitude = digit.as_f64() * self.scale_factor;
        }

        while self
            .digits
            .get(self.high_water_mark)
            .is_some_and(Option::is_some)
        {
            self.high_water_mark += 1;
        }

        debug!(
            index = slot,
            digit = digit.value(),
            high_water_mark = self.high_water_mark,
            "extracted digit"
        );
        digit
    }
}

impl DigitEngine for PiEngine {
    fn get_digit(&mut self, index: i64) -> Result<HexDigit> {
        let slot = self.slot(index)?;
        Ok(self.fill(slot))
    }

    fn compute_range(&mut self, start: i64, end: i64) {
        let Some(last) = self.capacity().checked_sub(1) else {
            return;
        };
        let last = i64::try_from(last).unwrap_or(i64::MAX).min(end);
        for index in start.max(0)..=last {
            // In range by construction.
            self.fill(index as usize);
        }
    }

    fn total_magnitude(&mut self) -> Result<f64> {
        for index in 0..MAGNITUDE_DIGITS as i64 {
            self.get_digit(index)?;
        }
        Ok(matrix::magnitude(&self.violation_magnitudes))
    }

    fn determinant(&mut self) -> Result<f64> {
        let mut digits = [HexDigit::default(); MATRIX_DIGITS];
        for (index, digit) in digits.iter_mut().enumerate() {
            *digit = self.get_digit(index as i64)?;
        }

        let determinant = Matrix3::from_digits(&digits).determinant();
        debug!(determinant, "computed digit matrix determinant");
        self.determinant = Some(determinant);
        Ok(determinant)
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}
