// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::hull::convex_hull;
use crate::point::{signed_area, Point2};
use crate::quad::Quad;

/// One of the four trapezoids between the outer quad and the drag rectangle.
///
/// Vertex order: outer corner, its inner corner, the previous inner corner,
/// the previous outer corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region(pub [Point2; 4]);

impl Region {
    pub fn points(&self) -> &[Point2; 4] {
        &self.0
    }

    pub fn area(&self) -> f32 {
        signed_area(&self.0).abs()
    }
}

/// Corners of the axis-aligned rectangle spanned by two opposite points.
pub fn inner_rect(a: Point2, b: Point2) -> [Point2; 4] {
    [
        Point2::new(a.x, a.y),
        Point2::new(b.x, a.y),
        Point2::new(b.x, b.y),
        Point2::new(a.x, b.y),
    ]
}

/// Split `outer` into four regions around the rectangle `a`..`b`.
///
/// Returns `None` when the rectangle has zero width or height.
pub fn partition(outer: &Quad, a: Point2, b: Point2) -> Option<[Region; 4]> {
    let inner = Quad::from_hull(convex_hull(inner_rect(a, b))).ok()?;

    Some(std::array::from_fn(|i| {
        let prev = (i + 3) % 4;
        Region([outer[i], inner[i], inner[prev], outer[prev]])
    }))
}
