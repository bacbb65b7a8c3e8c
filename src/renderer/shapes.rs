//! Shape generation for dogs and their trails
//!
//! Everything is emitted as a triangle list in arena pixel coordinates.

use glam::Vec2;

use super::vertex::{Vertex, colors, palette_color};
use crate::config::SimConfig;
use crate::sim::{BodySnapshot, Snapshot, TrailPoint};

/// Outline thickness in pixels
const OUTLINE_WIDTH: f32 = 2.0;
/// Half-size of a trail dot
const TRAIL_DOT_RADIUS: f32 = 2.0;

/// Trail opacity: 255 for a fresh point, fading to 0 at `max_len`
pub fn trail_alpha(age: u32, max_len: usize) -> u8 {
    if max_len == 0 {
        return 0;
    }
    let alpha = 255.0 * (1.0 - age as f32 / max_len as f32);
    alpha.clamp(0.0, 255.0) as u8
}

/// Two triangles covering an axis-aligned rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let Vec2 { x: x0, y: y0 } = top_left;
    let Vec2 { x: x1, y: y1 } = top_left + size;
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Faded square dots along a dog's trail
pub fn trail_dots(trail: &[TrailPoint], color: [f32; 4], max_len: usize) -> Vec<Vertex> {
    let half = Vec2::splat(TRAIL_DOT_RADIUS);
    let mut vertices = Vec::with_capacity(trail.len() * 6);
    for point in trail {
        let alpha = trail_alpha(point.age, max_len);
        if alpha == 0 {
            continue;
        }
        let [r, g, b, _] = color;
        let faded = [r, g, b, alpha as f32 / 255.0];
        vertices.extend(rect(point.pos - half, half * 2.0, faded));
    }
    vertices
}

/// Outlined box for one dog (outline first, fill on top)
pub fn dog_box(dog: &BodySnapshot, size: Vec2) -> Vec<Vertex> {
    let outline = if dog.powered {
        colors::POWERED_OUTLINE
    } else {
        colors::OUTLINE
    };
    let mut fill = palette_color(dog.color_index);
    if dog.powered {
        // Brighten toward white
        for channel in &mut fill[..3] {
            *channel = (*channel + 0.35).min(1.0);
        }
    }

    let inset = Vec2::splat(OUTLINE_WIDTH);
    let mut vertices = Vec::with_capacity(12);
    vertices.extend(rect(dog.pos, size, outline));
    vertices.extend(rect(dog.pos + inset, (size - inset * 2.0).max(Vec2::ZERO), fill));
    vertices
}

/// Full frame: all trails beneath all dogs
pub fn build_frame(snapshot: &Snapshot, config: &SimConfig) -> Vec<Vertex> {
    let size = config.body_size();
    let mut vertices = Vec::new();
    for dog in &snapshot.bodies {
        vertices.extend(trail_dots(
            &dog.trail,
            palette_color(dog.color_index),
            config.max_trail_length,
        ));
    }
    for dog in &snapshot.bodies {
        vertices.extend(dog_box(dog, size));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(powered: bool) -> BodySnapshot {
        BodySnapshot {
            id: 0,
            name: "Rex".to_string(),
            pos: Vec2::new(10.0, 20.0),
            color_index: 2,
            hit_count: 0,
            powered,
            trail: vec![
                TrailPoint {
                    pos: Vec2::new(30.0, 30.0),
                    age: 30,
                },
                TrailPoint {
                    pos: Vec2::new(32.0, 30.0),
                    age: 0,
                },
            ],
        }
    }

    #[test]
    fn test_trail_alpha() {
        assert_eq!(trail_alpha(0, 30), 255);
        assert_eq!(trail_alpha(15, 30), 127);
        assert_eq!(trail_alpha(30, 30), 0);
        assert_eq!(trail_alpha(45, 30), 0);
        assert_eq!(trail_alpha(3, 0), 0);
    }

    #[test]
    fn test_rect_corners() {
        let quad = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), colors::OUTLINE);
        assert_eq!(quad[0].position, [1.0, 2.0]);
        assert_eq!(quad[2].position, [4.0, 6.0]);
    }

    #[test]
    fn test_fully_faded_points_skipped() {
        let dog = dog(false);
        let vertices = trail_dots(&dog.trail, colors::OUTLINE, 30);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].color[3], 1.0);
    }

    #[test]
    fn test_dog_box_colors() {
        let normal = dog_box(&dog(false), Vec2::new(48.0, 32.0));
        assert_eq!(normal.len(), 12);
        assert_eq!(normal[0].color, colors::OUTLINE);
        assert_eq!(normal[6].color, colors::PALETTE[2]);
        assert_eq!(normal[6].position, [12.0, 22.0]);

        let powered = dog_box(&dog(true), Vec2::new(48.0, 32.0));
        assert_eq!(powered[0].color, colors::POWERED_OUTLINE);
        assert_eq!(powered[6].color, [0.35, 0.35, 1.0, 1.0]);
    }

    #[test]
    fn test_build_frame_orders_trails_first() {
        let snapshot = Snapshot {
            time_ticks: 1,
            bodies: vec![dog(false)],
        };
        let vertices = build_frame(&snapshot, &SimConfig::default());
        assert_eq!(vertices.len(), 6 + 12);
        assert_eq!(vertices[6].color, colors::OUTLINE);
    }
}
