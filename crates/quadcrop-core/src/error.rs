// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadError {
    #[error("projected hull has {corners} corners, expected 4")]
    NotAQuad { corners: usize },
}

/// Reasons a crop tool invocation refuses to start.
///
/// The tool state is never touched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("View3D not found, cannot run operator")]
    NoViewport,

    #[error("no active object")]
    NoActiveObject,

    #[error("active object '{name}' is not a mesh")]
    NotAMesh { name: String },

    #[error("active object '{name}' must be in object mode")]
    WrongMode { name: String },

    #[error(transparent)]
    Quad(#[from] QuadError),
}
