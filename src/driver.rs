//! Headless driver helpers
//!
//! The core never places dogs itself; this is where a driver picks random
//! starting positions, names and masses, and runs the tick loop without a
//! renderer attached.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::config::SimConfig;
use crate::sim::{BodySpec, RandomSource, SimEvent, Simulation};

/// Names handed out in order (wrapping with a number suffix)
pub const DOG_NAMES: [&str; 8] = [
    "Rex", "Fido", "Bella", "Max", "Luna", "Buddy", "Daisy", "Rocky",
];

/// Largest initial speed on each axis
pub const SPAWN_MAX_SPEED: f32 = 5.0;
/// Initial mass range
pub const SPAWN_MASS_MIN: f32 = 1.0;
pub const SPAWN_MASS_MAX: f32 = 3.0;

/// Display name for the i-th dog
pub fn dog_name(index: usize) -> String {
    let base = DOG_NAMES[index % DOG_NAMES.len()];
    match index / DOG_NAMES.len() {
        0 => base.to_string(),
        round => format!("{} {}", base, round + 1),
    }
}

/// Random starting states for `count` dogs, all inside the arena
pub fn spawn_bodies<G: Rng>(config: &SimConfig, count: usize, rng: &mut G) -> Vec<BodySpec> {
    let max = config.max_position();
    (0..count)
        .map(|i| {
            let pos = Vec2::new(rng.random_range(0.0..=max.x), rng.random_range(0.0..=max.y));
            let vel = Vec2::new(
                rng.random_range(-SPAWN_MAX_SPEED..=SPAWN_MAX_SPEED),
                rng.random_range(-SPAWN_MAX_SPEED..=SPAWN_MAX_SPEED),
            );
            let mass = rng.random_range(SPAWN_MASS_MIN..=SPAWN_MASS_MAX);
            BodySpec::new(dog_name(i), pos, vel, mass).with_color(i as u32)
        })
        .collect()
}

/// Totals over a headless run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub collisions: u64,
    pub wall_bounces: u64,
    pub power_ups: u64,
    /// (name, hits) for the dog with the most hits
    pub top_dog: Option<(String, u32)>,
}

/// Step `ticks` times, tallying events
pub fn run<R: RandomSource>(sim: &mut Simulation<R>, ticks: u64) -> RunSummary {
    let mut summary = RunSummary::default();
    for _ in 0..ticks {
        sim.step();
        summary.ticks += 1;
        for event in sim.events() {
            match event {
                SimEvent::Collision { .. } => summary.collisions += 1,
                SimEvent::WallBounce { .. } => summary.wall_bounces += 1,
                SimEvent::PoweredUp { .. } => summary.power_ups += 1,
                SimEvent::PowerExpired { .. } => {}
            }
        }
    }

    summary.top_dog = sim
        .bodies()
        .iter()
        .max_by_key(|b| b.hit_count())
        .map(|b| (b.name().to_string(), b.hit_count()));

    log::info!(
        "Ran {} ticks: {} collisions, {} wall bounces, {} power-ups",
        summary.ticks,
        summary.collisions,
        summary.wall_bounces,
        summary.power_ups
    );
    summary
}
