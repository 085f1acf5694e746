//! Simulation entities module.
//!
//! This module organizes rover entity logic.

pub mod rover;

pub use rover::*;
