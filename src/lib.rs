//! Grid simulation of rovers on Mars.
//!
//! [`sim`] holds the engine: rovers, placement, command interpretation and
//! collision checks, with presentation delegated to a [`sim::Renderer`].
//! [`demo`] is a terminal front end built on top of it.

pub mod config;
pub mod demo;
pub mod sim;
