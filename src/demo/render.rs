//! Terminal rendering.
//!
//! This module prints the grid and rover state for the demo.

use std::io::Write;

use log::error;

use crate::sim::{GridSnapshot, MoveRejection, Renderer, Rover};

/// Prints the grid after every change and a "shake" line when a rover is blocked.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn on_grid_changed(&mut self, snapshot: &GridSnapshot) {
        let text = format_grid(snapshot);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            error!("[Demo] Failed to draw grid: {}", e);
        }
    }

    fn on_move_rejected(&mut self, name: &str, reason: MoveRejection) {
        if let Err(e) = writeln!(self.out, "~~ {} shakes: {} ~~", name, reason) {
            error!("[Demo] Failed to draw rejection: {}", e);
        }
    }
}

/// Builds the text picture of the grid: one row per line, `..` for an empty
/// cell and the first two letters of the rover name followed by its heading
/// for an occupied one. A legend with the rover labels follows.
pub fn format_grid(snapshot: &GridSnapshot) -> String {
    let mut text = String::new();

    for y in 0..snapshot.height {
        for x in 0..snapshot.width {
            let symbol = match snapshot.rover_at(x, y) {
                Some(rover) => rover_symbol(rover),
                None => "..".to_string(),
            };
            text.push_str(&format!("{:<4}", symbol));
        }
        text.push('\n');
    }

    for rover in &snapshot.rovers {
        text.push_str(&format!("  {} facing {}\n", rover.display_label(), rover.heading));
    }
    text.push('\n');
    text
}

fn rover_symbol(rover: &Rover) -> String {
    let initials: String = rover.name.chars().take(2).collect();
    format!("{}{}", initials, rover.heading)
}
