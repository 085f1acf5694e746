/// Demo configuration constants.
///
/// Parameters of the terminal demo: the rovers placed at start-up and the
/// random "wander" autopilot.
pub const WANDER_STEPS: usize = 20; // Number of command strings sent in wander mode.

/// Longest command string generated for a single wander step.
pub const WANDER_MAX_COMMAND_LEN: usize = 6;

/// Rovers placed when the demo starts, as `(x, y, name)`.
pub const INITIAL_ROVERS: [(i32, i32, &str); 3] = [
    (1, 2, "spirit"),
    (2, 2, "opportunity"),
    (1, 3, "sojourner"),
];

/// Commands sent once after the initial placement, as `(name, commands)`.
pub const INITIAL_COMMANDS: [(&str, &str); 3] = [
    ("opportunity", "L"),
    ("sojourner", "L"),
    ("spirit", "LL"),
];
