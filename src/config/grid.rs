/// Grid configuration.
///
/// Default dimensions of Mars and the [`GridConfig`] struct used to build a simulator.
use serde::{Deserialize, Serialize};

/// Number of columns in the default grid.
pub const DEFAULT_GRID_WIDTH: usize = 10;

/// Number of rows in the default grid.
pub const DEFAULT_GRID_HEIGHT: usize = 5;

/// Dimensions of the grid a simulator is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}
