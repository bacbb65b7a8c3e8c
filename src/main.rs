//! Dog Battle headless runner
//!
//! Runs the arena without a window and prints the final snapshot as JSON.
//! Set RUST_LOG=debug to watch collisions and power-ups as they happen.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use dog_battle::consts::{BODY_COUNT, TICK_RATE_HZ};
use dog_battle::driver::{run, spawn_bodies};
use dog_battle::sim::{SeededSource, Simulation};
use dog_battle::{ConfigPreset, SimConfig, SimError};

/// Default run length: 30 seconds of arena time
const DEFAULT_TICKS: u64 = 30 * TICK_RATE_HZ as u64;

#[derive(Parser, Debug)]
#[command(name = "dog-battle", about = "Run the dog arena headless and print the final snapshot")]
struct Args {
    /// Preset name (reference, screensaver) or path to a JSON config
    #[arg(default_value = "reference")]
    config: String,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,
}

/// A preset name wins over a file of the same name
fn resolve_config(arg: &str) -> Result<SimConfig, SimError> {
    match ConfigPreset::from_str(arg) {
        Some(preset) => Ok(SimConfig::from_preset(preset)),
        None => SimConfig::load(arg),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn start(args: Args) -> Result<(), SimError> {
    let config = resolve_config(&args.config)?;
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut source = SeededSource::new(seed);
    let specs = spawn_bodies(&config, BODY_COUNT, source.rng_mut());
    let mut sim = Simulation::new(config, specs, source)?;
    log::info!("Arena seeded with {}", seed);

    let summary = run(&mut sim, args.ticks);
    if let Some((name, hits)) = &summary.top_dog {
        log::info!("Top dog: {} with {} hits", name, hits);
    }

    println!("{}", sim.snapshot().to_json()?);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dog Battle (headless) starting...");

    let args = Args::parse();
    if let Err(e) = start(args) {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web
}
