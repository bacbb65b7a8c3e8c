//! Renderer-agnostic draw list
//!
//! Turns a simulation snapshot into plain triangle-list vertices that any
//! GPU or software backend can upload. No drawing happens here.

pub mod shapes;
pub mod vertex;

pub use shapes::{build_frame, trail_alpha};
pub use vertex::{Vertex, as_bytes, colors, palette_color};
