// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::partition::{inner_rect, Region};
use crate::point::Point2;
use crate::quad::Quad;
use crate::selection::{Phase, SelectionState};

pub const DEFAULT_ACCENT: u32 = 0xFF0A_84FF;
pub const DEFAULT_SHADE: u32 = 0x800F_1115;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub pos: Point2,
    pub snapped: bool,
}

/// What the host should rasterize in its per-frame draw callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub outline: Quad,
    pub markers: Vec<Marker>,
    pub drag_rect: Option<[Point2; 4]>,
    /// Areas the crop would remove, drawn hatched over the image.
    pub shaded: Vec<Region>,
    pub accent_colour: u32, // ARGB
    pub shade_colour: u32,  // ARGB
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub accent_colour: u32,
    pub shade_colour: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            accent_colour: DEFAULT_ACCENT,
            shade_colour: DEFAULT_SHADE,
        }
    }
}

/// Draw list for `state`; `None` when no invocation is active.
pub fn build_overlay(state: &SelectionState, style: OverlayStyle) -> Option<Overlay> {
    let outline = *state.quad()?;
    let [first, second] = state.vertices();

    let mut overlay = Overlay {
        outline,
        markers: Vec::new(),
        drag_rect: None,
        shaded: Vec::new(),
        accent_colour: style.accent_colour,
        shade_colour: style.shade_colour,
    };

    match state.phase() {
        Phase::Idle => {
            if let Some(pos) = first {
                overlay.markers.push(Marker {
                    pos,
                    snapped: state.is_snapped(),
                });
            }
        }
        Phase::Anchored => {
            if let (Some(a), Some(b)) = (first, second) {
                overlay.markers.push(Marker {
                    pos: a,
                    snapped: state.is_anchor_snapped(),
                });
                overlay.markers.push(Marker {
                    pos: b,
                    snapped: state.is_snapped(),
                });
                overlay.drag_rect = Some(inner_rect(a, b));
            }
            if let Some(regions) = state.preview() {
                overlay.shaded.extend(regions);
            }
        }
    }

    Some(overlay)
}
