//! Box-box collision detection and response
//!
//! Detection is a plain AABB overlap test over every pair. Response treats
//! each axis as an independent 1-D elastic collision weighted by mass; there
//! is no positional correction, so boxes may overlap for a tick.

use glam::Vec2;

use super::body::Body;

/// Whether two equally sized boxes overlap (touching edges do not count)
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2, size: Vec2) -> bool {
    a.x < b.x + size.x && a.x + size.x > b.x && a.y < b.y + size.y && a.y + size.y > b.y
}

/// All overlapping pairs `(i, j)` with `i < j`, in enumeration order
pub fn detect_collisions(bodies: &[Body], size: Vec2) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if boxes_overlap(bodies[i].pos, bodies[j].pos, size) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Post-collision velocities of a 1-D elastic collision
///
/// Equal masses simply exchange velocities. The weighted sums run in f64 so
/// that any finite f32 masses stay finite.
#[inline]
pub fn elastic_1d(m_a: f32, v_a: f32, m_b: f32, v_b: f32) -> (f32, f32) {
    if m_a == m_b {
        return (v_b, v_a);
    }
    let (m_a, v_a, m_b, v_b) = (m_a as f64, v_a as f64, m_b as f64, v_b as f64);
    let total = m_a + m_b;
    let v_a_new = ((m_a - m_b) * v_a + 2.0 * m_b * v_b) / total;
    let v_b_new = ((m_b - m_a) * v_b + 2.0 * m_a * v_a) / total;
    (v_a_new as f32, v_b_new as f32)
}

/// Per-axis elastic response for two velocity vectors
pub fn elastic_response(m_a: f32, v_a: Vec2, m_b: f32, v_b: Vec2) -> (Vec2, Vec2) {
    let (ax, bx) = elastic_1d(m_a, v_a.x, m_b, v_b.x);
    let (ay, by) = elastic_1d(m_a, v_a.y, m_b, v_b.y);
    (Vec2::new(ax, ay), Vec2::new(bx, by))
}

/// Resolve one detected pair in place, counting the hit on both dogs
pub fn resolve_collision(a: &mut Body, b: &mut Body) {
    let (vel_a, vel_b) = elastic_response(a.mass, a.vel, b.mass, b.vel);
    a.vel = vel_a;
    b.vel = vel_b;
    a.register_hit();
    b.register_hit();
}

/// Mutable references to two distinct elements
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j);
    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodySpec;

    const SIZE: Vec2 = Vec2::new(48.0, 32.0);

    fn body(id: u32, pos: Vec2, vel: Vec2, mass: f32) -> Body {
        Body::from_spec(id, BodySpec::new(format!("dog{id}"), pos, vel, mass), 4)
    }

    #[test]
    fn test_overlap() {
        assert!(boxes_overlap(Vec2::ZERO, Vec2::new(47.0, 31.0), SIZE));
        assert!(boxes_overlap(Vec2::new(10.0, 10.0), Vec2::ZERO, SIZE));
        // Touching edges are not overlapping
        assert!(!boxes_overlap(Vec2::ZERO, Vec2::new(48.0, 0.0), SIZE));
        assert!(!boxes_overlap(Vec2::ZERO, Vec2::new(0.0, 32.0), SIZE));
        // Overlap on one axis only
        assert!(!boxes_overlap(Vec2::ZERO, Vec2::new(10.0, 100.0), SIZE));
    }

    #[test]
    fn test_detect_pairs_in_order() {
        let bodies = vec![
            body(0, Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0),
            body(1, Vec2::new(300.0, 300.0), Vec2::ZERO, 1.0),
            body(2, Vec2::new(20.0, 10.0), Vec2::ZERO, 1.0),
            body(3, Vec2::new(30.0, 20.0), Vec2::ZERO, 1.0),
        ];
        assert_eq!(detect_collisions(&bodies, SIZE), vec![(0, 2), (0, 3), (2, 3)]);
    }

    #[test]
    fn test_detect_single_body() {
        let bodies = vec![body(0, Vec2::ZERO, Vec2::ONE, 1.0)];
        assert!(detect_collisions(&bodies, SIZE).is_empty());
    }

    #[test]
    fn test_unequal_mass_head_on() {
        let (a, b) = elastic_1d(1.0, 3.0, 2.0, -1.0);
        assert!((a - (-7.0 / 3.0)).abs() < 1e-5);
        assert!((b - 5.0 / 3.0).abs() < 1e-5);
        // Momentum is conserved
        assert!((1.0 * a + 2.0 * b - (3.0 - 2.0)).abs() < 1e-5);
    }

    #[test]
    fn test_huge_masses_stay_finite() {
        let (a, b) = elastic_1d(3.0e38, 1.0, 2.0e38, -1.0);
        assert!((a - (-0.6)).abs() < 1e-6);
        assert!((b - 1.4).abs() < 1e-6);

        let (a, b) = elastic_1d(f32::MAX, 20.0, f32::MIN_POSITIVE, -20.0);
        assert!(a.is_finite() && b.is_finite());
    }

    #[test]
    fn test_equal_mass_swaps_exactly() {
        let (a, b) = elastic_response(3.0, Vec2::new(1.3, -0.7), 3.0, Vec2::new(-2.1, 4.4));
        assert_eq!(a, Vec2::new(-2.1, 4.4));
        assert_eq!(b, Vec2::new(1.3, -0.7));
    }

    #[test]
    fn test_resolve_counts_hits() {
        let mut a = body(0, Vec2::ZERO, Vec2::new(3.0, 1.0), 1.0);
        let mut b = body(1, Vec2::new(10.0, 0.0), Vec2::new(-1.0, 0.0), 2.0);
        resolve_collision(&mut a, &mut b);

        assert_eq!(a.hit_count(), 1);
        assert_eq!(b.hit_count(), 1);
        assert_eq!(a.color_index(), 1);
        assert_eq!(b.color_index(), 1);
        assert!((a.vel().x + 7.0 / 3.0).abs() < 1e-5);
        assert!((b.vel().x - 5.0 / 3.0).abs() < 1e-5);
        // y: ((1-2)*1 + 0) / 3 and (0 + 2*1*1) / 3
        assert!((a.vel().y + 1.0 / 3.0).abs() < 1e-5);
        assert!((b.vel().y - 2.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_pair_mut() {
        let mut items = [1, 2, 3, 4];
        let (a, b) = pair_mut(&mut items, 1, 3);
        std::mem::swap(a, b);
        assert_eq!(items, [1, 4, 3, 2]);
    }
}
