//! Simulation parameters
//!
//! Everything tunable about the arena lives in `SimConfig`. Configs are
//! plain JSON; missing fields fall back to the reference values.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Named parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConfigPreset {
    /// Friction, lossy walls and random power-ups
    #[default]
    Reference,
    /// Constant-velocity screensaver: no friction, perfect bounces, no power-ups
    Screensaver,
}

impl ConfigPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigPreset::Reference => "Reference",
            ConfigPreset::Screensaver => "Screensaver",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reference" | "default" => Some(ConfigPreset::Reference),
            "screensaver" => Some(ConfigPreset::Screensaver),
            _ => None,
        }
    }
}

/// Largest trail a dog may keep (trails are preallocated)
pub const TRAIL_LENGTH_LIMIT: usize = 4096;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub body_width: f32,
    pub body_height: f32,

    // === Motion ===
    /// Velocity multiplier per tick, in (0, 1]
    pub friction: f32,
    /// Speed kept after a wall bounce, in [0, 1]
    pub restitution: f32,

    // === Power-ups ===
    pub speed_threshold: f32,
    /// Per-tick trigger chance, in [0, 1]
    pub boost_probability: f32,
    pub boost_speed: f32,
    /// Ticks a power-up lasts (at least 1)
    pub power_duration: u32,

    // === Visuals ===
    pub max_trail_length: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            body_width: BODY_WIDTH,
            body_height: BODY_HEIGHT,

            friction: FRICTION,
            restitution: RESTITUTION,

            speed_threshold: SPEED_THRESHOLD,
            boost_probability: BOOST_PROBABILITY,
            boost_speed: BOOST_SPEED,
            power_duration: POWER_DURATION,

            max_trail_length: MAX_TRAIL_LENGTH,
        }
    }
}

impl SimConfig {
    /// Create a config from a preset
    pub fn from_preset(preset: ConfigPreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a preset on top of the current arena/visual settings
    pub fn apply_preset(&mut self, preset: ConfigPreset) {
        let reference = Self::default();
        match preset {
            ConfigPreset::Reference => {
                self.friction = reference.friction;
                self.restitution = reference.restitution;
                self.boost_probability = reference.boost_probability;
            }
            ConfigPreset::Screensaver => {
                self.friction = 1.0;
                self.restitution = 1.0;
                self.boost_probability = 0.0;
            }
        }
    }

    /// Arena extent as a vector
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Body extent as a vector
    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }

    /// Largest legal top-left corner
    pub fn max_position(&self) -> Vec2 {
        self.arena() - self.body_size()
    }

    /// Reject parameters that would break the tick invariants
    pub fn validate(&self) -> Result<(), SimError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("body_width", self.body_width)?;
        positive("body_height", self.body_height)?;
        if self.body_width > self.arena_width {
            return Err(invalid("body_width", "exceeds arena_width"));
        }
        if self.body_height > self.arena_height {
            return Err(invalid("body_height", "exceeds arena_height"));
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(invalid("friction", "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(invalid("restitution", "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.boost_probability) {
            return Err(invalid("boost_probability", "must be in [0, 1]"));
        }
        non_negative("speed_threshold", self.speed_threshold)?;
        non_negative("boost_speed", self.boost_speed)?;
        if self.power_duration == 0 {
            return Err(invalid("power_duration", "must be at least 1 tick"));
        }
        if self.max_trail_length == 0 {
            return Err(invalid("max_trail_length", "must be at least 1"));
        }
        if self.max_trail_length > TRAIL_LENGTH_LIMIT {
            return Err(invalid("max_trail_length", "must be at most 4096"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> SimError {
    SimError::InvalidConfig { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be finite and positive"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be finite and non-negative"))
    }
}
