// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the digit engine.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias using [`EngineError`].
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by [`PiEngine`](super::PiEngine) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Storage for the digit cache could not be reserved. Fatal for that engine.
    #[error("could not allocate a cache of {capacity} digits")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    /// Requested index is negative or not below the capacity. Engine state is unchanged.
    #[error("digit index {index} is out of range (capacity {capacity})")]
    IndexOutOfRange { index: i64, capacity: usize },
}
