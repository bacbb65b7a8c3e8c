//! Simulation core
//!
//! Everything that moves lives here. The core is single-threaded and
//! never fails once constructed:
//! - One `step()` advances every dog by exactly one tick
//! - Randomness only enters through an injected `RandomSource`
//! - Stable iteration order (by dog ID, which is the creation index)
//! - No rendering, pacing or platform dependencies

pub mod body;
pub mod collision;
pub mod integrate;
pub mod rng;
pub mod state;
pub mod tick;
pub mod trail;
pub mod walls;

pub use body::{Body, BodySpec, PowerState};
pub use collision::{boxes_overlap, detect_collisions, elastic_1d, elastic_response, resolve_collision};
pub use integrate::{IntegrateOutcome, PowerTransition, integrate_body, update_power};
pub use rng::{FixedSource, RandomSource, SeededSource};
pub use state::{BodySnapshot, SimEvent, Simulation, Snapshot};
pub use tick::step;
pub use trail::{TrailBuffer, TrailPoint};
pub use walls::{WallContact, bounce_walls};
