//! Error types for the simulation engine.
//!
//! The engine performs no I/O, so the only failure is an intent whose
//! arguments do not make sense for the current grid. Every rejected intent
//! leaves the session untouched.

use thiserror::Error;

use crate::config::MAX_CELLS;

/// Rejected input. Returned synchronously, before any state is mutated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Rows or columns not strictly positive, or more than `MAX_CELLS` cells
    #[error("grid must be positive and at most {max} cells, got {rows}x{cols}", max = MAX_CELLS)]
    Dimensions { rows: i64, cols: i64 },

    /// Cell index outside `0..cells`
    #[error("cell index {index} out of range for a grid of {cells} cells")]
    CellIndex { index: usize, cells: usize },

    /// Row/column pair outside the grid
    #[error("position (row {row}, col {col}) is outside a {rows}x{cols} grid")]
    Position {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Playback frequency not a positive finite number
    #[error("frequency must be a positive number of steps per second, got {0}")]
    Frequency(f32),

    /// More live cells requested than the grid holds
    #[error("cannot seed {requested} live cells into a grid of {cells} cells")]
    SeedCount { requested: usize, cells: usize },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, ValidationError>;

impl ValidationError {
    /// Check a requested shape, accepting signed input the way a numeric
    /// field hands it over.
    pub fn check_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) => Self::check_shape(r, c).map(|_| (r, c)),
            _ => Err(Self::Dimensions { rows, cols }),
        }
    }

    /// Check an unsigned shape. Returns the cell count `rows * cols`.
    pub fn check_shape(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols)
            .filter(|&cells| rows > 0 && cols > 0 && cells <= MAX_CELLS)
            .ok_or(Self::Dimensions {
                rows: i64::try_from(rows).unwrap_or(i64::MAX),
                cols: i64::try_from(cols).unwrap_or(i64::MAX),
            })
    }

    /// Check a playback frequency
    pub fn check_frequency(freq: f32) -> Result<f32> {
        if freq.is_finite() && freq > 0.0 {
            Ok(freq)
        } else {
            Err(Self::Frequency(freq))
        }
    }
}
