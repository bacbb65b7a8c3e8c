//! Dog bodies and their power-up state

use std::num::NonZeroU32;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::trail::TrailBuffer;

/// Power-up state
///
/// A powered dog always has at least one tick left; the tick its timer
/// would reach zero it drops back to `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerState {
    #[default]
    Normal,
    Powered { ticks_remaining: NonZeroU32 },
}

impl PowerState {
    pub fn is_powered(&self) -> bool {
        matches!(self, PowerState::Powered { .. })
    }

    /// Remaining power ticks (0 when normal)
    pub fn timer(&self) -> u32 {
        match self {
            PowerState::Normal => 0,
            PowerState::Powered { ticks_remaining } => ticks_remaining.get(),
        }
    }
}

/// Initial values for one dog, supplied by whoever builds the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub color_index: u32,
}

impl BodySpec {
    pub fn new(name: impl Into<String>, pos: Vec2, vel: Vec2, mass: f32) -> Self {
        Self {
            name: name.into(),
            pos,
            vel,
            mass,
            color_index: 0,
        }
    }

    pub fn with_color(mut self, color_index: u32) -> Self {
        self.color_index = color_index;
        self
    }
}

/// A dog entity
///
/// Fields are only mutated by the integrator and collision resolver; the
/// rest of the world reads them through accessors.
#[derive(Debug, Clone, Serialize)]
pub struct Body {
    pub(crate) id: u32,
    pub(crate) name: String,
    /// Top-left corner
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) mass: f32,
    pub(crate) color_index: u32,
    pub(crate) hit_count: u32,
    pub(crate) power: PowerState,
    pub(crate) trail: TrailBuffer,
}

impl Body {
    /// Build from an already validated spec
    pub(crate) fn from_spec(id: u32, spec: BodySpec, trail_capacity: usize) -> Self {
        Self {
            id,
            name: spec.name,
            pos: spec.pos,
            vel: spec.vel,
            mass: spec.mass,
            color_index: spec.color_index,
            hit_count: 0,
            power: PowerState::Normal,
            trail: TrailBuffer::new(trail_capacity),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn color_index(&self) -> u32 {
        self.color_index
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn power(&self) -> PowerState {
        self.power
    }

    pub fn is_powered(&self) -> bool {
        self.power.is_powered()
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Count one collision against this dog
    pub(crate) fn register_hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
        self.color_index = self.color_index.wrapping_add(1);
    }
}
