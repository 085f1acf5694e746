//! Renderer interface.
//!
//! The simulator never draws anything itself. It notifies a [`Renderer`]
//! after every state change and whenever a rover refuses to move, and the
//! renderer decides how (or whether) to show it.

use log::error;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::sim::entities::Rover;
use crate::sim::error::MoveRejection;

/// Full view of the grid handed to renderers on every redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub rovers: Vec<Rover>,
}

impl GridSnapshot {
    pub fn rover_at(&self, x: usize, y: usize) -> Option<&Rover> {
        self.rovers.iter().find(|r| r.pos.x == x && r.pos.y == y)
    }
}

/// Notification emitted by the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum SimEvent {
    GridChanged(GridSnapshot),
    MoveRejected { name: String, reason: MoveRejection },
}

pub trait Renderer {
    /// The grid must be redrawn in full.
    fn on_grid_changed(&mut self, snapshot: &GridSnapshot);

    /// `name` tried to step forward and was refused.
    fn on_move_rejected(&mut self, name: &str, reason: MoveRejection);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_grid_changed(&mut self, _snapshot: &GridSnapshot) {}

    fn on_move_rejected(&mut self, _name: &str, _reason: MoveRejection) {}
}

/// Keeps every notification in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub events: Vec<SimEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redraw_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::GridChanged(_)))
            .count()
    }

    pub fn rejections(&self) -> Vec<(&str, MoveRejection)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SimEvent::MoveRejected { name, reason } => Some((name.as_str(), *reason)),
                _ => None,
            })
            .collect()
    }

    pub fn last_snapshot(&self) -> Option<&GridSnapshot> {
        self.events.iter().rev().find_map(|e| match e {
            SimEvent::GridChanged(snapshot) => Some(snapshot),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn on_grid_changed(&mut self, snapshot: &GridSnapshot) {
        self.events.push(SimEvent::GridChanged(snapshot.clone()));
    }

    fn on_move_rejected(&mut self, name: &str, reason: MoveRejection) {
        self.events.push(SimEvent::MoveRejected {
            name: name.to_string(),
            reason,
        });
    }
}

/// Writes each notification as one JSON object per line.
///
/// Write failures are logged and dropped; a broken output never stops the simulation.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &SimEvent) {
        let result = serde_json::to_writer(&mut self.out, event)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            error!("[JsonRenderer] Failed to write event: {}", e);
        }
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn on_grid_changed(&mut self, snapshot: &GridSnapshot) {
        self.emit(&SimEvent::GridChanged(snapshot.clone()));
    }

    fn on_move_rejected(&mut self, name: &str, reason: MoveRejection) {
        self.emit(&SimEvent::MoveRejected {
            name: name.to_string(),
            reason,
        });
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn on_grid_changed(&mut self, snapshot: &GridSnapshot) {
        (**self).on_grid_changed(snapshot);
    }

    fn on_move_rejected(&mut self, name: &str, reason: MoveRejection) {
        (**self).on_move_rejected(name, reason);
    }
}
