//! Interactive loop for driving rovers from the terminal.
//!
//! The loop keeps track of the selected rover and turns each line of input
//! into at most one single-character command for the simulator.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::config::demo::{INITIAL_COMMANDS, INITIAL_ROVERS};
use crate::sim::{Command, GridSimulator, Renderer, SimError};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Select(String),
    Command(Command),
    Quit,
    Unknown,
}

/// Arrow keys arrive as ANSI escape sequences when the terminal is in line mode.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();

    if let Some(name) = line.strip_prefix("select ").or_else(|| line.strip_prefix("s ")) {
        let name = name.trim();
        return if name.is_empty() { Input::Unknown } else { Input::Select(name.to_string()) };
    }

    match line {
        "\x1b[D" | "l" | "L" => Input::Command(Command::Left),
        "\x1b[A" | "m" | "M" => Input::Command(Command::Move),
        "\x1b[C" | "r" | "R" => Input::Command(Command::Right),
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown,
    }
}

/// Places the demo rovers and sends their opening commands.
pub fn setup<R: Renderer>(sim: &mut GridSimulator<R>) -> Result<(), SimError> {
    for (x, y, name) in INITIAL_ROVERS {
        sim.place_rover(x, y, name)?;
    }
    for (name, commands) in INITIAL_COMMANDS {
        sim.send_commands(name, commands)?;
    }
    Ok(())
}

/// Reads commands from `input` until it ends or the user quits.
pub fn run_game_loop<R: Renderer, I: BufRead, W: Write>(
    sim: &mut GridSimulator<R>,
    input: I,
    mut prompt: W,
) -> io::Result<()> {
    let mut current: Option<String> = None;

    write_prompt(&mut prompt, current.as_deref())?;
    for line in input.lines() {
        match parse_input(&line?) {
            Input::Select(name) => {
                if sim.find_rover_by_name(&name).is_some() {
                    writeln!(prompt, "Current rover: {}", name)?;
                    current = Some(name);
                } else {
                    writeln!(prompt, "No rover named {}", name)?;
                }
            }
            Input::Command(command) => match current.as_deref() {
                Some(name) => {
                    let command = command.as_char().to_string();
                    if let Err(e) = sim.send_commands(name, &command) {
                        warn!("[Demo] {}", e);
                    }
                }
                None => writeln!(prompt, "Please select a rover")?,
            },
            Input::Quit => break,
            Input::Unknown => debug!("[Demo] Unrecognised input"),
        }
        write_prompt(&mut prompt, current.as_deref())?;
    }

    Ok(())
}

fn write_prompt<W: Write>(prompt: &mut W, current: Option<&str>) -> io::Result<()> {
    match current {
        Some(name) => write!(prompt, "[{}] (← l, ↑ m, → r, s <name>, q) > ", name)?,
        None => write!(prompt, "(s <name> to select a rover, q to quit) > ")?,
    }
    prompt.flush()
}
