//! Grid simulator.
//!
//! [`GridSimulator`] owns the grid bounds and every rover on it. All rover
//! mutation goes through [`GridSimulator::place_rover`],
//! [`GridSimulator::attempt_move`] and [`GridSimulator::send_commands`]; callers
//! only ever see shared references to rovers.

use log::{debug, info, warn};

use crate::config::GridConfig;
use crate::sim::entities::Rover;
use crate::sim::error::{MoveRejection, SimError};
use crate::sim::renderer::{GridSnapshot, Renderer};
use crate::sim::systems::{check_move, is_within_bounds, parse_commands};
use crate::sim::types::{Command, CommandOutcome, Position};

pub struct GridSimulator<R: Renderer> {
    width: usize,
    height: usize,
    rovers: Vec<Rover>,
    renderer: R,
}

impl<R: Renderer> GridSimulator<R> {
    /// Creates an empty grid and asks the renderer to draw it.
    pub fn new(width: usize, height: usize, renderer: R) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }

        let mut sim = GridSimulator {
            width,
            height,
            rovers: Vec::new(),
            renderer,
        };
        info!("[Simulator] Grid created: {}x{}", width, height);
        sim.redraw();
        Ok(sim)
    }

    pub fn from_config(config: &GridConfig, renderer: R) -> Result<Self, SimError> {
        Self::new(config.width, config.height, renderer)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rovers in placement order.
    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn is_within_bounds(&self, x: i64, y: i64) -> bool {
        is_within_bounds(x, y, self.width, self.height)
    }

    pub fn rover_at(&self, pos: Position) -> Option<&Rover> {
        self.rovers.iter().find(|r| r.pos == pos)
    }

    pub fn find_rover_by_name(&self, name: &str) -> Option<&Rover> {
        self.rovers.iter().find(|r| r.name == name)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            rovers: self.rovers.clone(),
        }
    }

    /// Lands a new rover facing north at `(x, y)`.
    ///
    /// Checked in order: the cell must be on the grid, the cell must be free,
    /// and the name must not be taken. Nothing changes on failure.
    pub fn place_rover(&mut self, x: i32, y: i32, name: impl Into<String>) -> Result<&Rover, SimError> {
        let name = name.into();

        if !self.is_within_bounds(x as i64, y as i64) {
            warn!("[Simulator] Cannot place '{}': ({}, {}) is out of the range {}x{}", name, x, y, self.width, self.height);
            return Err(SimError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: self.width,
                height: self.height,
            });
        }

        let pos = Position::new(x as usize, y as usize);
        if let Some(occupant) = self.rover_at(pos) {
            warn!("[Simulator] Cannot place '{}': ({}, {}) already holds '{}'", name, x, y, occupant.name);
            return Err(SimError::OccupiedCell {
                x: pos.x,
                y: pos.y,
                occupant: occupant.name.clone(),
            });
        }

        if self.find_rover_by_name(&name).is_some() {
            warn!("[Simulator] Cannot place '{}': name already in use", name);
            return Err(SimError::DuplicateName(name));
        }

        info!("[Simulator] Rover '{}' placed at ({}, {})", name, pos.x, pos.y);
        self.rovers.push(Rover::new(name, pos));
        self.redraw();

        let index = self.rovers.len() - 1;
        Ok(&self.rovers[index])
    }

    /// Moves the named rover one cell forward if the target is on the grid and free.
    ///
    /// The outer error is for an unknown rover; the inner result is the step
    /// itself. A refused step leaves the rover where it was and plays the
    /// rejection cue.
    pub fn attempt_move(&mut self, name: &str) -> Result<Result<Position, MoveRejection>, SimError> {
        let index = self.index_of(name)?;
        let step = self.step(index);
        if step.is_ok() {
            self.redraw();
        }
        Ok(step)
    }

    /// Runs `commands` against the named rover, one character at a time.
    ///
    /// Unknown characters are skipped. A refused `M` does not stop the rest of
    /// the string, and effects already applied are kept. Returns one outcome per
    /// recognised command.
    pub fn send_commands(&mut self, name: &str, commands: &str) -> Result<Vec<CommandOutcome>, SimError> {
        let index = self.index_of(name)?;
        debug!("[Simulator] Commands for '{}': {:?}", name, commands);

        let outcomes = parse_commands(commands)
            .into_iter()
            .map(|command| self.apply(index, command))
            .collect();
        Ok(outcomes)
    }

    fn apply(&mut self, index: usize, command: Command) -> CommandOutcome {
        match command {
            Command::Left | Command::Right => {
                let rover = &mut self.rovers[index];
                rover.heading = if command == Command::Left {
                    rover.heading.turn_left()
                } else {
                    rover.heading.turn_right()
                };
                let heading = rover.heading;
                debug!("[Simulator] '{}' turned {:?}, now facing {}", rover.name, command, heading);
                self.redraw();
                CommandOutcome::Turned { heading }
            }
            Command::Move => match self.step(index) {
                Ok(to) => {
                    self.redraw();
                    CommandOutcome::Moved { to }
                }
                Err(reason) => CommandOutcome::Blocked { reason },
            },
        }
    }

    /// Single forward step without redraw. Rejections are logged and cued here.
    fn step(&mut self, index: usize) -> Result<Position, MoveRejection> {
        match check_move(&self.rovers, index, self.width, self.height) {
            Ok(target) => {
                let rover = &mut self.rovers[index];
                debug!("[Simulator] '{}' moved ({}, {}) -> ({}, {})", rover.name, rover.pos.x, rover.pos.y, target.x, target.y);
                rover.pos = target;
                Ok(target)
            }
            Err(reason) => {
                let rover = &self.rovers[index];
                warn!("[Simulator] '{}' cannot move {} from ({}, {}): {}", rover.name, rover.heading, rover.pos.x, rover.pos.y, reason);
                self.renderer.on_move_rejected(&rover.name, reason);
                Err(reason)
            }
        }
    }

    fn index_of(&self, name: &str) -> Result<usize, SimError> {
        self.rovers.iter().position(|r| r.name == name).ok_or_else(|| {
            warn!("[Simulator] No rover named '{}'", name);
            SimError::RoverNotFound(name.to_string())
        })
    }

    fn redraw(&mut self) {
        let snapshot = self.snapshot();
        self.renderer.on_grid_changed(&snapshot);
    }
}
