// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use pi_hex::engine::Result;
use pi_hex::matrix::{self, Matrix3};
use pi_hex::{DigitEngine, EngineConfig, EngineError, HexDigit, PiEngine};

/// Published hex digits of π after the point, indices 0..64.
pub const PI_HEX_DIGITS: &str = "243f6a8885a308d313198a2e03707344a4093822299f31d0082efa98ec4e6c89";

pub fn engine_with_capacity(capacity: usize) -> PiEngine {
    PiEngine::new(EngineConfig::new(capacity)).expect("engine allocation")
}

/// Cache contents, slot by slot, without computing anything.
pub fn snapshot(engine: &PiEngine) -> Vec<Option<HexDigit>> {
    (0..engine.capacity())
        .map(|index| engine.computed_digit(index))
        .collect()
}

/// A digit engine over a fixed digit list, for exercising code generic over [`DigitEngine`].
#[derive(Debug)]
pub struct FixedDigits {
    pub digits: Vec<HexDigit>,
    pub scale_factor: f64,
}

impl FixedDigits {
    pub fn new(values: &[u8], scale_factor: f64) -> Self {
        Self {
            digits: values.iter().map(|&v| HexDigit::new(v).unwrap()).collect(),
            scale_factor,
        }
    }
}

impl DigitEngine for FixedDigits {
    fn get_digit(&mut self, index: i64) -> Result<HexDigit> {
        usize::try_from(index)
            .ok()
            .and_then(|slot| self.digits.get(slot).copied())
            .ok_or(EngineError::IndexOutOfRange {
                index,
                capacity: self.digits.len(),
            })
    }

    fn compute_range(&mut self, _start: i64, _end: i64) {}

    fn total_magnitude(&mut self) -> Result<f64> {
        let mut v = [0.0; 3];
        for (index, component) in v.iter_mut().enumerate() {
            *component = self.get_digit(index as i64)?.as_f64() * self.scale_factor;
        }
        Ok(matrix::magnitude(&v))
    }

    fn determinant(&mut self) -> Result<f64> {
        let mut digits = [HexDigit::default(); 9];
        for (index, digit) in digits.iter_mut().enumerate() {
            *digit = self.get_digit(index as i64)?;
        }
        Ok(Matrix3::from_digits(&digits).determinant())
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}
