//! Simulator errors.
//!
//! [`SimError`] covers every operation that can be refused: building a grid
//! with a zero dimension, placing a rover where it cannot stand, and
//! addressing a rover that does not exist. [`MoveRejection`] is the reason a
//! single forward step did not happen. A rejected step is an ordinary outcome
//! of driving a rover, so it is reported as a value and never aborts the
//! command string it belongs to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("position ({x}, {y}) is out of the range {width}x{height}")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("cell ({x}, {y}) is already occupied by rover '{occupant}'")]
    OccupiedCell { x: usize, y: usize, occupant: String },

    #[error("a rover named '{0}' already exists")]
    DuplicateName(String),

    #[error("no rover named '{0}'")]
    RoverNotFound(String),
}

/// Why a forward step was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("target cell is outside the grid")]
    OutOfBounds,

    #[error("target cell is occupied by another rover")]
    Collision,
}
