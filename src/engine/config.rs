// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine configuration and named constants.

/// Multiplier applied to digits 0–2 when deriving the violation magnitudes.
pub const VIOLATION_SCALE_FACTOR: f64 = 14.4;

/// Number of digits cached when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 100;

/// Digits feeding the violation-magnitude vector (indices 0, 1, 2).
pub const MAGNITUDE_DIGITS: usize = 3;

/// Digits feeding the 3×3 matrix (indices 0..=8).
pub const MATRIX_DIGITS: usize = 9;

/// Settings fixed when a [`PiEngine`](super::PiEngine) is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Number of digit slots. Never grows after creation.
    pub capacity: usize,

    /// See [`VIOLATION_SCALE_FACTOR`].
    pub scale_factor: f64,
}

impl EngineConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            scale_factor: VIOLATION_SCALE_FACTOR,
        }
    }
}
