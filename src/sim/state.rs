//! Simulation state and read-only snapshots
//!
//! The simulation exclusively owns every dog. Between calls to `step()`
//! nothing in here changes, so a renderer can read freely.

use glam::Vec2;
use serde::Serialize;

use super::body::{Body, BodySpec};
use super::rng::{RandomSource, SeededSource};
use super::trail::TrailPoint;
use crate::config::SimConfig;
use crate::error::SimError;

/// Something worth reacting to (sound, flashes) that happened last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimEvent {
    WallBounce { body: u32, x_axis: bool, y_axis: bool },
    Collision { a: u32, b: u32 },
    PoweredUp { body: u32 },
    PowerExpired { body: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation<R = SeededSource> {
    pub(crate) config: SimConfig,
    /// Dogs in creation order (id == index)
    pub(crate) bodies: Vec<Body>,
    pub(crate) rng: R,
    pub(crate) time_ticks: u64,
    /// Events from the most recent tick
    pub(crate) events: Vec<SimEvent>,
}

impl Simulation<SeededSource> {
    /// Create a simulation with a seeded power-up source
    pub fn seeded(config: SimConfig, specs: Vec<BodySpec>, seed: u64) -> Result<Self, SimError> {
        Self::new(config, specs, SeededSource::new(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Validate everything up front so `step()` cannot fail
    pub fn new(config: SimConfig, specs: Vec<BodySpec>, rng: R) -> Result<Self, SimError> {
        config.validate()?;
        if specs.is_empty() {
            return Err(SimError::NoBodies);
        }

        let max = config.max_position();
        for (index, spec) in specs.iter().enumerate() {
            if !(spec.mass.is_finite() && spec.mass > 0.0) {
                return Err(SimError::InvalidMass {
                    index,
                    mass: spec.mass,
                });
            }
            if !spec.vel.is_finite() {
                return Err(SimError::InvalidVelocity {
                    index,
                    vx: spec.vel.x,
                    vy: spec.vel.y,
                });
            }
            let inside = spec.pos.is_finite()
                && spec.pos.cmpge(Vec2::ZERO).all()
                && spec.pos.cmple(max).all();
            if !inside {
                return Err(SimError::OutOfArena {
                    index,
                    x: spec.pos.x,
                    y: spec.pos.y,
                });
            }
        }

        let bodies: Vec<Body> = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Body::from_spec(i as u32, spec, config.max_trail_length))
            .collect();

        log::info!(
            "Simulation created: {} dogs in {}x{} arena",
            bodies.len(),
            config.arena_width,
            config.arena_height
        );

        Ok(Self {
            config,
            bodies,
            rng,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Advance one tick
    pub fn step(&mut self) {
        super::tick::step(self);
    }
}

impl<R> Simulation<R> {
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.get(id as usize)
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Events produced by the most recent `step()`
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Owned copy of everything a renderer draws
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time_ticks: self.time_ticks,
            bodies: self.bodies.iter().map(BodySnapshot::from).collect(),
        }
    }
}

/// Renderer view of one dog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub name: String,
    pub pos: Vec2,
    pub color_index: u32,
    pub hit_count: u32,
    pub powered: bool,
    /// Oldest first
    pub trail: Vec<TrailPoint>,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            name: body.name.clone(),
            pos: body.pos,
            color_index: body.color_index,
            hit_count: body.hit_count,
            powered: body.is_powered(),
            trail: body.trail.iter().copied().collect(),
        }
    }
}

/// Renderer view of the whole arena
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub bodies: Vec<BodySnapshot>,
}

impl Snapshot {
    /// Pretty JSON for dumping a frame
    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string_pretty(self).map_err(SimError::SnapshotEncode)
    }
}
