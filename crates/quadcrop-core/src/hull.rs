// Author: Dustin Pilgrim
// License: MIT

use crate::point::{cross, Point2};

/// Convex hull of an unordered point set (monotone chain).
///
/// Duplicates collapse. The result is counter-clockwise in the cross-product
/// sense, starts at the lexicographically smallest point and never contains
/// collinear neighbours. Zero or one distinct points are returned unchanged.
pub fn convex_hull<I>(points: I) -> Vec<Point2>
where
    I: IntoIterator<Item = Point2>,
{
    let mut pts: Vec<Point2> = points.into_iter().collect();
    pts.sort();
    pts.dedup();

    if pts.len() <= 1 {
        return pts;
    }

    let lower = half_hull(pts.iter().copied());
    let upper = half_hull(pts.iter().rev().copied());

    let mut hull = Vec::with_capacity(lower.len() + upper.len() - 2);
    hull.extend_from_slice(&lower[..lower.len() - 1]);
    hull.extend_from_slice(&upper[..upper.len() - 1]);
    hull
}

// Keeps strict left turns only.
fn half_hull(sorted: impl Iterator<Item = Point2>) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::new();
    for p in sorted {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
