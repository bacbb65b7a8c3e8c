//! Per-dog integration
//!
//! Order within a tick: move, trail, friction, power-up, walls. The wall
//! check therefore sees the friction-adjusted (or freshly boosted) velocity.

use std::num::NonZeroU32;

use super::body::{Body, PowerState};
use super::rng::RandomSource;
use super::walls::{WallContact, bounce_walls};
use crate::config::SimConfig;
use crate::{rect_center, unit_from_angle};

/// Power-up transition that happened during integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerTransition {
    Triggered,
    Expired,
}

/// What happened to one dog this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrateOutcome {
    pub walls: WallContact,
    pub power: Option<PowerTransition>,
}

/// Advance one dog by a tick
pub fn integrate_body<R: RandomSource + ?Sized>(
    body: &mut Body,
    config: &SimConfig,
    rng: &mut R,
) -> IntegrateOutcome {
    let size = config.body_size();

    body.pos += body.vel;

    // Age first so the fresh point reads as age 0
    body.trail.age();
    body.trail.record(rect_center(body.pos, size));

    body.vel *= config.friction;

    let power = update_power(body, config, rng);

    let walls = bounce_walls(
        &mut body.pos,
        &mut body.vel,
        size,
        config.arena(),
        config.restitution,
    );
    if walls.any() {
        log::trace!(
            "Dog {} bounced (x: {}, y: {})",
            body.id,
            walls.x,
            walls.y
        );
    }

    IntegrateOutcome { walls, power }
}

/// Run the power-up state machine for one tick
pub fn update_power<R: RandomSource + ?Sized>(
    body: &mut Body,
    config: &SimConfig,
    rng: &mut R,
) -> Option<PowerTransition> {
    match body.power {
        PowerState::Normal => {
            // Short-circuit: no draw is consumed while the dog is fast
            if body.vel.length() < config.speed_threshold && rng.unit() < config.boost_probability
            {
                let ticks_remaining = NonZeroU32::new(config.power_duration)?;
                let theta = rng.angle();
                body.vel = unit_from_angle(theta) * config.boost_speed;
                body.power = PowerState::Powered { ticks_remaining };
                log::debug!(
                    "Dog {} ({}) powered up for {} ticks",
                    body.id,
                    body.name,
                    ticks_remaining
                );
                Some(PowerTransition::Triggered)
            } else {
                None
            }
        }
        PowerState::Powered { ticks_remaining } => match NonZeroU32::new(ticks_remaining.get() - 1) {
            Some(ticks_remaining) => {
                body.power = PowerState::Powered { ticks_remaining };
                None
            }
            None => {
                body.power = PowerState::Normal;
                log::debug!("Dog {} ({}) power-up expired", body.id, body.name);
                Some(PowerTransition::Expired)
            }
        },
    }
}
