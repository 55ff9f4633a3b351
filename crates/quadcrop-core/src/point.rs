// Author: Dustin Pilgrim
// License: MIT

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A screen-space point (x right, y down).
///
/// Equality and ordering are lexicographic: x first, then y. Floats are
/// compared with `total_cmp`, so `Point2` can be sorted and deduplicated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dist2(self, other: Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Z component of `(a - o) x (b - o)`.
///
/// Positive when `o -> a -> b` turns counter-clockwise, zero when collinear.
pub fn cross(o: Point2, a: Point2, b: Point2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point2 {}

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point2 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

/// Shoelace signed area; positive for counter-clockwise winding.
pub fn signed_area(points: &[Point2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut acc = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    acc * 0.5
}
