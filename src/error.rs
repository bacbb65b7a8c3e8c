//! Construction-time errors
//!
//! A running simulation never fails; everything that could make `step()`
//! misbehave is rejected here instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a simulation or loading its config.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("simulation needs at least one body")]
    NoBodies,
    #[error("body {index} mass {mass} must be finite and positive")]
    InvalidMass { index: usize, mass: f32 },
    #[error("body {index} velocity ({vx}, {vy}) must be finite")]
    InvalidVelocity { index: usize, vx: f32, vy: f32 },
    #[error("body {index} position ({x}, {y}) is outside the arena")]
    OutOfArena { index: usize, x: f32, y: f32 },
    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("failed to encode snapshot: {0}")]
    SnapshotEncode(#[source] serde_json::Error),
}
