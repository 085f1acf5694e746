//! Rover entity.
//!
//! A rover is plain data: where it stands and which way it faces. Only the
//! simulator creates and mutates rovers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sim::types::{Heading, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rover {
    pub name: String,
    pub pos: Position,
    pub heading: Heading,
}

impl Rover {
    /// New rovers always land facing north.
    pub(crate) fn new(name: String, pos: Position) -> Self {
        Self {
            name,
            pos,
            heading: Heading::North,
        }
    }

    pub fn x(&self) -> usize {
        self.pos.x
    }

    pub fn y(&self) -> usize {
        self.pos.y
    }

    /// Human-readable label with 1-based coordinates, e.g. `spirit x2 y3`.
    pub fn display_label(&self) -> String {
        format!("{} x{} y{}", self.name, self.pos.x + 1, self.pos.y + 1)
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}
