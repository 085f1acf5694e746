//! Command string parsing.

use log::trace;

use crate::sim::types::Command;

/// Splits a command string into commands, left to right.
/// Characters that are not `L`, `R` or `M` are skipped.
pub fn parse_commands(commands: &str) -> Vec<Command> {
    commands
        .chars()
        .filter_map(|c| {
            let command = Command::from_char(c);
            if command.is_none() {
                trace!("[Simulator] Ignoring unknown command character {:?}", c);
            }
            command
        })
        .collect()
}
