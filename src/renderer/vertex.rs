//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a GPU buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for arena elements
pub mod colors {
    /// Dog palette, indexed by color index mod 8
    pub const PALETTE: [[f32; 4]; 8] = [
        [1.0, 0.0, 0.0, 1.0],   // Red
        [0.0, 1.0, 0.0, 1.0],   // Green
        [0.0, 0.0, 1.0, 1.0],   // Blue
        [1.0, 1.0, 0.0, 1.0],   // Yellow
        [1.0, 0.0, 1.0, 1.0],   // Magenta
        [0.0, 1.0, 1.0, 1.0],   // Cyan
        [1.0, 0.5, 0.0, 1.0],   // Orange
        [0.5, 0.0, 1.0, 1.0],   // Purple
    ];
    pub const OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const POWERED_OUTLINE: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Palette entry for a dog's color index
pub fn palette_color(color_index: u32) -> [f32; 4] {
    colors::PALETTE[color_index as usize % colors::PALETTE.len()]
}
