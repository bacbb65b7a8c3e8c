//! Arena wall bounces
//!
//! The arena is the rectangle [0, width] x [0, height]. A box that pokes
//! out of either side is clamped back in and its velocity on that axis is
//! reversed and scaled by the restitution factor.

use glam::Vec2;

/// Which axes bounced this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub x: bool,
    pub y: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Clamp a box of `size` into an arena of `arena` extent and reflect velocity
///
/// Requires `size <= arena` on both axes (checked at construction).
pub fn bounce_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
    arena: Vec2,
    restitution: f32,
) -> WallContact {
    WallContact {
        x: bounce_axis(&mut pos.x, &mut vel.x, size.x, arena.x, restitution),
        y: bounce_axis(&mut pos.y, &mut vel.y, size.y, arena.y, restitution),
    }
}

fn bounce_axis(pos: &mut f32, vel: &mut f32, size: f32, extent: f32, restitution: f32) -> bool {
    if *pos < 0.0 {
        *pos = 0.0;
        *vel = -*vel * restitution;
        true
    } else if *pos > extent - size {
        // Trailing edge past the far wall
        *pos = extent - size;
        *vel = -*vel * restitution;
        true
    } else {
        false
    }
}
