pub mod error;
pub mod renderer;
pub mod state;
pub mod types;

pub mod entities;
pub mod systems;

pub use entities::Rover;
pub use error::{MoveRejection, SimError};
pub use renderer::{GridSnapshot, JsonLinesRenderer, NullRenderer, RecordingRenderer, Renderer, SimEvent};
pub use state::GridSimulator;
pub use types::{Command, CommandOutcome, Heading, Position};
