//! Rover movement system.
//!
//! This module decides whether a rover may step forward on the grid.

use crate::sim::entities::Rover;
use crate::sim::error::MoveRejection;
use crate::sim::types::{Heading, Position};

/// Cell one step ahead of `pos` along `heading`, or `None` if that leaves the grid.
pub fn step_target(pos: Position, heading: Heading, width: usize, height: usize) -> Option<Position> {
    let (dx, dy) = heading.displacement();
    let x = pos.x as i64 + dx;
    let y = pos.y as i64 + dy;

    if is_within_bounds(x, y, width, height) {
        Some(Position::new(x as usize, y as usize))
    } else {
        None
    }
}

pub fn is_within_bounds(x: i64, y: i64, width: usize, height: usize) -> bool {
    x >= 0 && y >= 0 && (x as u64) < width as u64 && (y as u64) < height as u64
}

/// Checks the forward step of `rovers[index]` without applying it.
/// Returns the target cell when the step is legal.
pub fn check_move(
    rovers: &[Rover],
    index: usize,
    width: usize,
    height: usize,
) -> Result<Position, MoveRejection> {
    let rover = &rovers[index];
    let target = step_target(rover.pos, rover.heading, width, height)
        .ok_or(MoveRejection::OutOfBounds)?;

    // The mover itself can never be on the target cell, so any hit is another rover.
    if rovers.iter().any(|r| r.pos == target) {
        return Err(MoveRejection::Collision);
    }

    Ok(target)
}
