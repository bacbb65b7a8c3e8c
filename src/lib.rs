//! Dog Battle - bouncing boxes that collide, slow down and power up
//!
//! Core modules:
//! - `sim`: Simulation core (bodies, trails, walls, collisions, power-ups)
//! - `config`: Tunable simulation parameters
//! - `error`: Construction-time errors
//! - `renderer`: Renderer-agnostic draw list built from a snapshot
//! - `driver`: Headless driver helpers (random placement, run summaries)

pub mod config;
pub mod driver;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{ConfigPreset, SimConfig};
pub use error::SimError;

use glam::Vec2;

/// Reference configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    /// Every dog is a fixed-size box
    pub const BODY_WIDTH: f32 = 48.0;
    pub const BODY_HEIGHT: f32 = 32.0;

    /// Number of dogs in the reference arena
    pub const BODY_COUNT: usize = 8;

    /// Trail points kept per dog
    pub const MAX_TRAIL_LENGTH: usize = 30;

    /// Velocity multiplier applied every tick
    pub const FRICTION: f32 = 0.99;
    /// Fraction of speed kept after a wall bounce
    pub const RESTITUTION: f32 = 0.8;

    /// Below this speed a dog may power up
    pub const SPEED_THRESHOLD: f32 = 0.5;
    /// Chance per tick that a slow dog powers up
    pub const BOOST_PROBABILITY: f32 = 0.3;
    /// Speed granted by a power-up (pixels/tick)
    pub const BOOST_SPEED: f32 = 15.0;
    /// Power-up duration in ticks (1 second at 60 Hz)
    pub const POWER_DURATION: u32 = 60;

    /// Cadence the external driver steps at
    pub const TICK_RATE_HZ: u32 = 60;
}

/// Center of a box given its top-left corner and size
#[inline]
pub fn rect_center(top_left: Vec2, size: Vec2) -> Vec2 {
    top_left + size * 0.5
}

/// Unit vector for an angle in radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
