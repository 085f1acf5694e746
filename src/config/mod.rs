/// Main configuration module.
///
/// Re-exports submodules for grid and demo configuration.
pub mod demo;
pub mod grid;

pub use grid::GridConfig;
