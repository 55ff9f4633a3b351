// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::partition::{partition, Region};
use crate::point::Point2;
use crate::quad::Quad;
use crate::resolve::Snapping;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub pos: Point2,
    /// Modifier held: place freely, never snap.
    pub precise: bool,
}

/// Input the selection reacts to, already stripped of host specifics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ToolEvent {
    Press(PointerInput),
    Move(PointerInput),
    Cancel,
    PassThrough,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    /// First corner placed; the second follows the pointer.
    Anchored,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    Running,
    PassThrough,
    /// Second press. `regions` is `None` for a zero-area drag.
    Finished { regions: Option<[Region; 4]> },
    Cancelled,
}

/// Drag state for one tool invocation.
///
/// `SelectionState::default()` is the reset value: no quad, no vertices,
/// not dragging, not snapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    quad: Option<Quad>,
    vertices: [Option<Point2>; 2],
    phase: Phase,
    snapped: bool,
    /// Snap result of the first press, kept while the second corner moves.
    anchor_snapped: bool,
    snap: Snapping,
}

impl SelectionState {
    /// Fresh Idle state over `quad`.
    pub fn new(quad: Quad, snap: Snapping) -> Self {
        Self {
            quad: Some(quad),
            snap,
            ..Self::default()
        }
    }

    pub fn quad(&self) -> Option<&Quad> {
        self.quad.as_ref()
    }

    pub fn vertices(&self) -> [Option<Point2>; 2] {
        self.vertices
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Anchored
    }

    pub fn is_snapped(&self) -> bool {
        self.snapped
    }

    pub fn is_anchor_snapped(&self) -> bool {
        self.anchor_snapped
    }

    pub fn is_active(&self) -> bool {
        self.quad.is_some()
    }

    /// Regions the current drag would commit, if any.
    pub fn preview(&self) -> Option<[Region; 4]> {
        match (self.phase, self.quad, self.vertices) {
            (Phase::Anchored, Some(q), [Some(a), Some(b)]) => partition(&q, a, b),
            _ => None,
        }
    }

    pub fn transition(mut self, event: ToolEvent) -> (Self, Transition) {
        let Some(quad) = self.quad else {
            return (self, Transition::PassThrough);
        };

        match (self.phase, event) {
            (_, ToolEvent::Cancel) => (Self::default(), Transition::Cancelled),

            (_, ToolEvent::PassThrough) => (self, Transition::PassThrough),

            (Phase::Idle, ToolEvent::Move(input)) => {
                let p = self.resolve(&quad, input);
                self.vertices[0] = Some(p);
                (self, Transition::Running)
            }

            (Phase::Idle, ToolEvent::Press(input)) => {
                let p = self.resolve(&quad, input);
                self.vertices = [Some(p), Some(p)];
                self.anchor_snapped = self.snapped;
                self.phase = Phase::Anchored;
                (self, Transition::Running)
            }

            (Phase::Anchored, ToolEvent::Move(input)) => {
                let p = self.resolve(&quad, input);
                self.vertices[1] = Some(p);
                (self, Transition::Running)
            }

            (Phase::Anchored, ToolEvent::Press(input)) => {
                let end = self.resolve(&quad, input);
                let regions = self.vertices[0].and_then(|start| partition(&quad, start, end));
                (Self::default(), Transition::Finished { regions })
            }
        }
    }

    fn resolve(&mut self, quad: &Quad, input: PointerInput) -> Point2 {
        let r = self.snap.resolve(input.pos, quad, !input.precise);
        self.snapped = r.snapped;
        r.point
    }
}
