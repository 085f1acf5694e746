//! Random autopilot.
//!
//! Drives rovers with random command strings, one string per step.

use log::info;
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::config::demo::WANDER_MAX_COMMAND_LEN;
use crate::sim::{Command, CommandOutcome, GridSimulator, Renderer};

/// Random command string of 1 to `max_len` characters. Moves are drawn twice
/// as often as each turn so rovers actually travel.
pub fn random_commands<G: Rng + ?Sized>(rng: &mut G, max_len: usize) -> String {
    let len = rng.random_range(1..=max_len.max(1));
    (0..len)
        .map(|_| match rng.random_range(0..4) {
            0 => Command::Left.as_char(),
            1 => Command::Right.as_char(),
            _ => Command::Move.as_char(),
        })
        .collect()
}

/// Sends `steps` random command strings, each to a randomly chosen rover.
/// Returns how many commands were refused along the way.
pub fn wander<R: Renderer, G: Rng + ?Sized>(sim: &mut GridSimulator<R>, rng: &mut G, steps: usize) -> usize {
    let mut blocked = 0;

    for step in 0..steps {
        let Some(name) = sim.rovers().iter().map(|r| r.name.clone()).choose(rng) else {
            return blocked;
        };
        let commands = random_commands(rng, WANDER_MAX_COMMAND_LEN);
        info!("[Demo] Wander step {}: '{}' <- {}", step + 1, name, commands);

        if let Ok(outcomes) = sim.send_commands(&name, &commands) {
            blocked += outcomes
                .iter()
                .filter(|o| matches!(o, CommandOutcome::Blocked { .. }))
                .count();
        }
    }

    blocked
}
