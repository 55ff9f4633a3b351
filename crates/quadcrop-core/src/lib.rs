// Author: Dustin Pilgrim
// License: MIT

pub mod error;
pub mod hull;
pub mod input;
pub mod overlay;
pub mod partition;
pub mod point;
pub mod project;
pub mod quad;
pub mod resolve;
pub mod selection;
pub mod tool;

pub use error::{PreconditionError, QuadError};
pub use hull::convex_hull;
pub use input::{Button, HostEvent, Key};
pub use overlay::{build_overlay, Marker, Overlay, OverlayStyle};
pub use partition::{inner_rect, partition, Region};
pub use point::Point2;
pub use project::{Projector, ViewInfo, ViewProjector};
pub use quad::Quad;
pub use resolve::{resolve_vertex, Resolved, Snapping, SNAP_DISTANCE_SQ};
pub use selection::{Phase, PointerInput, SelectionState, ToolEvent, Transition};
pub use tool::{
    AreaKind, CropTool, HostRequest, InteractionMode, InvokeContext, ModalStatus, ObjectKind,
    ReportLevel, SceneObject,
};
