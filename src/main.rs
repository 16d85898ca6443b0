//! Collision Sandbox entry point
//!
//! Runs the sandbox headless: seeds the population, simulates the configured
//! number of frames against a staging surface, then prints the final shapes
//! as JSON.
//!
//! Usage: `collision-sandbox [config.json]`

use std::process::ExitCode;

use collision_sandbox::SandboxConfig;
use collision_sandbox::renderer::{StagingSurface, draw_frame};
use collision_sandbox::sim::{FrameInput, SimState, tick};

/// Sandbox instance holding all state
struct Sandbox {
    state: SimState,
    surface: StagingSurface,
    total_bounces: usize,
    total_collisions: usize,
}

impl Sandbox {
    fn new(config: SandboxConfig) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            state: SimState::with_population(config)?,
            surface: StagingSurface::new(),
            total_bounces: 0,
            total_collisions: 0,
        })
    }

    /// Run one frame: simulate, then draw
    fn frame(&mut self) {
        // No windowing layer in headless mode, so no events
        let report = tick(&mut self.state, &FrameInput::default());
        draw_frame(&self.state, &mut self.surface);

        self.total_bounces += report.bounces;
        self.total_collisions += report.collisions.len();
        if !report.collisions.is_empty() {
            log::debug!(
                "Frame {}: {} colliding pairs",
                report.frame,
                report.collisions.len()
            );
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SandboxConfig::load(path)?,
        None => {
            log::info!("No config given, using defaults");
            SandboxConfig::default()
        }
    };
    let frames = config.frames;

    let mut sandbox = Sandbox::new(config)?;
    for _ in 0..frames {
        sandbox.frame();
    }

    log::info!(
        "Ran {} frames: {} shapes, {} bounces, {} collisions, {} bytes staged last frame",
        sandbox.state.frame,
        sandbox.state.shapes.len(),
        sandbox.total_bounces,
        sandbox.total_collisions,
        sandbox.surface.vertex_bytes().len()
    );

    println!("{}", serde_json::to_string_pretty(&sandbox.state.shapes)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Collision Sandbox (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
