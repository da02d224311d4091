// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small fixed-size linear algebra over digits: a 3×3 determinant and a
//! 3-vector magnitude.

use crate::bbp::HexDigit;

/// A 3-vector of `f64`.
pub type Vector3 = [f64; 3];

/// Euclidean norm √(x² + y² + z²).
pub fn magnitude(v: &Vector3) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// A 3×3 matrix, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Arrange nine digits row-major: row `r` is `digits[3r..3r + 3]`.
    pub fn from_digits(digits: &[HexDigit; 9]) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, digit) in digits.iter().enumerate() {
            rows[i / 3][i % 3] = digit.as_f64();
        }
        Self { rows }
    }

    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Determinant by cofactor expansion along the first row:
    /// `a(ei − fh) − b(di − fg) + c(dh − eg)`.
    pub fn determinant(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
}
