// Author: Dustin Pilgrim
// License: MIT

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// Host view description: combined view-projection matrix and region size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewInfo {
    /// Column-major 4x4 view-projection matrix.
    pub view_proj: [f32; 16],
    pub width: u32,
    pub height: u32,
}

impl ViewInfo {
    pub fn identity(width: u32, height: u32) -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array(),
            width,
            height,
        }
    }
}

/// World space to region space.
pub trait Projector {
    /// `None` when the point cannot be placed on screen (behind the camera).
    fn project(&self, world: Vec3) -> Option<Point2>;

    fn project_all(&self, world: &[[f32; 3]]) -> Vec<Point2> {
        world
            .iter()
            .filter_map(|v| self.project(Vec3::from_array(*v)))
            .collect()
    }
}

/// Clip space -> NDC -> region pixels, y pointing down.
#[derive(Debug, Clone, Copy)]
pub struct ViewProjector {
    view_proj: Mat4,
    width: f32,
    height: f32,
}

impl ViewProjector {
    pub fn new(view: &ViewInfo) -> Self {
        Self {
            view_proj: Mat4::from_cols_array(&view.view_proj),
            width: view.width as f32,
            height: view.height as f32,
        }
    }
}

impl Projector for ViewProjector {
    fn project(&self, world: Vec3) -> Option<Point2> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        Some(Point2 {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
        })
    }
}
