//! Fixed-capacity trail history
//!
//! Each dog owns one ring buffer of recent center points. Points are kept
//! oldest-first; once full, recording a new point overwrites the oldest.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Trail point for fading motion trails
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Ticks since this point was recorded (newest = 0)
    pub age: u32,
}

/// Ring buffer of trail points
#[derive(Debug, Clone, Serialize)]
pub struct TrailBuffer {
    points: Vec<TrailPoint>,
    /// Index of the oldest point once the buffer has wrapped
    head: usize,
    capacity: usize,
}

impl TrailBuffer {
    /// Create an empty trail; capacity must be at least 1
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Append a fresh point (age 0), evicting the oldest when full
    pub fn record(&mut self, pos: Vec2) {
        let point = TrailPoint { pos, age: 0 };
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Age every retained point by one tick
    pub fn age(&mut self) {
        for point in &mut self.points {
            point.age = point.age.saturating_add(1);
        }
    }

    /// Points oldest-first (most recent last)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TrailPoint> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer)
    }

    /// Most recently recorded point
    pub fn latest(&self) -> Option<&TrailPoint> {
        if self.points.is_empty() {
            None
        } else if self.head == 0 {
            self.points.last()
        } else {
            self.points.get(self.head - 1)
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
    }
}
