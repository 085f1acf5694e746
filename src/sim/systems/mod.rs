pub mod commands;
pub mod movement;

pub use commands::*;
pub use movement::*;
