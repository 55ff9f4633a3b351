// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::error::QuadError;
use crate::hull::convex_hull;
use crate::point::Point2;

/// A convex quadrilateral in hull order.
///
/// Corners are positional: 0 is the lexicographic minimum, the rest follow
/// counter-clockwise (in the cross-product sense), so with y pointing down
/// an axis-aligned quad reads top-left, top-right, bottom-right, bottom-left.
///
/// `clamp` and the partitioner treat `[0].x..[1].x` and `[0].y..[3].y` as the
/// bounding box. That only holds for axis-aligned quads; a rotated silhouette
/// clamps against the wrong edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quad([Point2; 4]);

impl Quad {
    /// Hull `points` and require exactly four corners.
    pub fn from_points<I>(points: I) -> Result<Self, QuadError>
    where
        I: IntoIterator<Item = Point2>,
    {
        Self::from_hull(convex_hull(points))
    }

    /// Wrap a hull that is already in canonical order.
    pub fn from_hull(hull: Vec<Point2>) -> Result<Self, QuadError> {
        let corners: [Point2; 4] = hull
            .try_into()
            .map_err(|h: Vec<Point2>| QuadError::NotAQuad { corners: h.len() })?;
        Ok(Self(corners))
    }

    pub fn corners(&self) -> &[Point2; 4] {
        &self.0
    }

    pub fn corner(&self, i: usize) -> Point2 {
        self.0[i % 4]
    }

    /// Clamp into the quad's bounding box (axis-aligned assumption, see type docs).
    pub fn clamp(&self, p: Point2) -> Point2 {
        let [c0, c1, _, c3] = self.0;
        Point2 {
            x: clamp_between(p.x, c0.x, c1.x),
            y: clamp_between(p.y, c0.y, c3.y),
        }
    }
}

impl std::ops::Index<usize> for Quad {
    type Output = Point2;

    fn index(&self, i: usize) -> &Point2 {
        &self.0[i]
    }
}

// Like f32::clamp, but tolerates lo > hi (degenerate or rotated quads) instead of panicking.
fn clamp_between(v: f32, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    v.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Quad {
        Quad::from_points([p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0), p(0.0, 0.0)])
            .expect("square is a quad")
    }

    #[test]
    fn corners_follow_hull_order() {
        let q = square();
        assert_eq!(q.corners(), &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
        assert_eq!(q.corner(5), p(10.0, 0.0));
    }

    #[test]
    fn mesh_cloud_reduces_to_quad() {
        // A subdivided plane: edge midpoints and the centre must vanish.
        let mut pts = Vec::new();
        for i in 0..=4 {
            for j in 0..=4 {
                pts.push(p(i as f32 * 25.0 + 100.0, j as f32 * 10.0 + 50.0));
            }
        }
        let q = Quad::from_points(pts).expect("plane projects to a quad");
        assert_eq!(q[0], p(100.0, 50.0));
        assert_eq!(q[2], p(200.0, 90.0));
    }

    #[test]
    fn triangle_is_rejected() {
        let err = Quad::from_points([p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)]).unwrap_err();
        assert_eq!(err, QuadError::NotAQuad { corners: 3 });
    }

    #[test]
    fn pentagon_is_rejected() {
        let err = Quad::from_points([
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(5.0, 3.0),
            p(2.0, 6.0),
            p(-1.0, 3.0),
        ])
        .unwrap_err();
        assert_eq!(err, QuadError::NotAQuad { corners: 5 });
    }

    #[test]
    fn clamp_keeps_inside_points_and_pins_outside_ones() {
        let q = square();
        assert_eq!(q.clamp(p(3.0, 7.0)), p(3.0, 7.0));
        assert_eq!(q.clamp(p(-40.0, 200.0)), p(0.0, 10.0));
        assert_eq!(q.clamp(p(15.0, -1.0)), p(10.0, 0.0));
    }
}
