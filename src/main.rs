//! Main entry point for the terminal demo.
//!
//! Builds a grid, lands the demo rovers and then either hands control to the
//! keyboard or lets the wander autopilot drive.
//!
//! Usage: `mars-rover [width height] [--wander] [--json]`

use std::io;

use log::info;
use mars_rover::config::GridConfig;
use mars_rover::config::demo::WANDER_STEPS;
use mars_rover::demo::game_loop::{run_game_loop, setup};
use mars_rover::demo::render::TerminalRenderer;
use mars_rover::demo::wander::wander;
use mars_rover::sim::{GridSimulator, JsonLinesRenderer, Renderer};

struct Options {
    grid: GridConfig,
    wander: bool,
    json: bool,
}

fn parse_args() -> io::Result<Options> {
    let mut options = Options {
        grid: GridConfig::default(),
        wander: false,
        json: false,
    };
    let mut dims = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--wander" => options.wander = true,
            "--json" => options.json = true,
            other => {
                let value = other.parse::<usize>().map_err(|e| {
                    io::Error::new(io::ErrorKind::InvalidInput, format!("invalid argument '{}': {}", other, e))
                })?;
                dims.push(value);
            }
        }
    }

    match dims.as_slice() {
        [] => {}
        [width, height] => options.grid = GridConfig::new(*width, *height),
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "expected both width and height",
            ));
        }
    }

    Ok(options)
}

fn main() -> io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let options = parse_args()?;
    let renderer: Box<dyn Renderer> = if options.json {
        Box::new(JsonLinesRenderer::new(io::stdout()))
    } else {
        Box::new(TerminalRenderer::stdout())
    };

    let mut sim = GridSimulator::from_config(&options.grid, renderer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    setup(&mut sim).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    if options.wander {
        let blocked = wander(&mut sim, &mut rand::rng(), WANDER_STEPS);
        info!("[Demo] Wander finished, {} moves refused", blocked);
        return Ok(());
    }

    let stdin = io::stdin();
    if options.json {
        run_game_loop(&mut sim, stdin.lock(), io::stderr())
    } else {
        run_game_loop(&mut sim, stdin.lock(), io::stdout())
    }
}
