// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::point::Point2;
use crate::quad::Quad;

/// Squared snap radius in screen units.
pub const SNAP_DISTANCE_SQ: f32 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolved {
    pub point: Point2,
    pub snapped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapping {
    /// Squared distance below which a corner captures the pointer.
    pub distance_sq: f32,
}

impl Default for Snapping {
    fn default() -> Self {
        Self {
            distance_sq: SNAP_DISTANCE_SQ,
        }
    }
}

impl Snapping {
    /// Snap `raw` to the first corner (in stored order) within the radius,
    /// otherwise clamp it into the quad's bounding box.
    pub fn resolve(&self, raw: Point2, quad: &Quad, snap_enabled: bool) -> Resolved {
        if snap_enabled {
            if let Some(&corner) = quad
                .corners()
                .iter()
                .find(|c| raw.dist2(**c) < self.distance_sq)
            {
                return Resolved {
                    point: corner,
                    snapped: true,
                };
            }
        }

        Resolved {
            point: quad.clamp(raw),
            snapped: false,
        }
    }
}

/// [`Snapping::resolve`] with the default radius.
pub fn resolve_vertex(raw: Point2, quad: &Quad, snap_enabled: bool) -> Resolved {
    Snapping::default().resolve(raw, quad, snap_enabled)
}
