// Demo front end for the simulator. Provides the terminal renderer, the
// interactive loop and the random wander autopilot.
pub mod game_loop;
pub mod render;
pub mod wander;
