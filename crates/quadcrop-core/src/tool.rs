// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

#[cfg(feature = "clap")]
use clap::ValueEnum;

use crate::error::PreconditionError;
use crate::input::HostEvent;
use crate::overlay::{build_overlay, Overlay, OverlayStyle};
use crate::partition::Region;
use crate::project::{Projector, ViewInfo, ViewProjector};
use crate::quad::Quad;
use crate::resolve::Snapping;
use crate::selection::{SelectionState, ToolEvent, Transition};

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaKind {
    View3d,
    Other,
}

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Mesh,
    Curve,
    Empty,
}

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Object,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub mode: InteractionMode,
    /// World-space vertex positions.
    pub vertices: Vec<[f32; 3]>,
}

/// Everything the host hands over when the tool is started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeContext {
    pub area: AreaKind,
    pub object: Option<SceneObject>,
    pub view: ViewInfo,
}

/// What the host reports back to its event loop after each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalStatus {
    Running,
    PassThrough,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportLevel {
    Warning,
    Error,
}

/// Side effects the host must carry out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostRequest {
    AddDrawHandler,
    RemoveDrawHandler,
    TagRedraw,
    /// Hand the regions to the crop consumer.
    Commit { regions: [Region; 4] },
    Report { level: ReportLevel, message: String },
}

impl HostRequest {
    /// The warning shown when `invoke` refuses to start.
    pub fn refused(err: &PreconditionError) -> Self {
        HostRequest::Report {
            level: ReportLevel::Warning,
            message: err.to_string(),
        }
    }
}

/// One modal crop interaction at a time.
#[derive(Debug, Default)]
pub struct CropTool {
    state: SelectionState,
    draw_handler: bool,
    style: OverlayStyle,
}

impl CropTool {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn has_draw_handler(&self) -> bool {
        self.draw_handler
    }

    /// Start a new interaction, replacing any running one.
    ///
    /// On error nothing changes, including a running interaction.
    pub fn invoke(
        &mut self,
        ctx: &InvokeContext,
        snap: Snapping,
    ) -> Result<Vec<HostRequest>, PreconditionError> {
        let quad = outer_quad(ctx)?;

        let mut requests = self.reset();
        self.state = SelectionState::new(quad, snap);
        self.draw_handler = true;

        requests.push(HostRequest::AddDrawHandler);
        requests.push(HostRequest::TagRedraw);
        Ok(requests)
    }

    pub fn handle(&mut self, event: HostEvent) -> (ModalStatus, Vec<HostRequest>) {
        if !self.is_active() {
            return (ModalStatus::PassThrough, Vec::new());
        }

        let state = std::mem::take(&mut self.state);
        let (next, transition) = state.transition(ToolEvent::from(event));
        self.state = next;

        match transition {
            Transition::Running => (ModalStatus::Running, vec![HostRequest::TagRedraw]),
            Transition::PassThrough => (ModalStatus::PassThrough, vec![HostRequest::TagRedraw]),
            Transition::Finished { regions } => {
                let mut requests = Vec::new();
                if let Some(regions) = regions {
                    requests.push(HostRequest::Commit { regions });
                }
                requests.extend(self.reset());
                (ModalStatus::Finished, requests)
            }
            Transition::Cancelled => (ModalStatus::Cancelled, self.reset()),
        }
    }

    /// Host-initiated cancel (operator aborted from outside the event stream).
    pub fn cancel(&mut self) -> Vec<HostRequest> {
        if !self.is_active() {
            return self.reset();
        }
        self.handle(HostEvent::Key(crate::input::Key::Escape)).1
    }

    pub fn overlay(&self) -> Option<Overlay> {
        build_overlay(&self.state, self.style)
    }

    fn reset(&mut self) -> Vec<HostRequest> {
        self.state = SelectionState::default();

        if std::mem::replace(&mut self.draw_handler, false) {
            vec![HostRequest::RemoveDrawHandler, HostRequest::TagRedraw]
        } else {
            Vec::new()
        }
    }
}

fn outer_quad(ctx: &InvokeContext) -> Result<Quad, PreconditionError> {
    if ctx.area != AreaKind::View3d {
        return Err(PreconditionError::NoViewport);
    }

    let object = ctx.object.as_ref().ok_or(PreconditionError::NoActiveObject)?;
    if object.kind != ObjectKind::Mesh {
        return Err(PreconditionError::NotAMesh {
            name: object.name.clone(),
        });
    }
    if object.mode != InteractionMode::Object {
        return Err(PreconditionError::WrongMode {
            name: object.name.clone(),
        });
    }

    let projected = ViewProjector::new(&ctx.view).project_all(&object.vertices);
    Ok(Quad::from_points(projected)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadError;
    use crate::input::{Button, Key};
    use crate::point::Point2;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    fn plane() -> SceneObject {
        // NDC-sized plane with a centre vertex; identity view maps it onto a 200x100 region.
        SceneObject {
            name: "Plane".into(),
            kind: ObjectKind::Mesh,
            mode: InteractionMode::Object,
            vertices: vec![
                [-0.5, -0.5, 0.0],
                [0.5, -0.5, 0.0],
                [0.5, 0.5, 0.0],
                [-0.5, 0.5, 0.0],
                [0.0, 0.0, 0.0],
            ],
        }
    }

    fn ctx(object: Option<SceneObject>) -> InvokeContext {
        InvokeContext {
            area: AreaKind::View3d,
            object,
            view: ViewInfo::identity(200, 100),
        }
    }

    fn press(x: f32, y: f32) -> HostEvent {
        HostEvent::Press {
            button: Button::Primary,
            pos: p(x, y),
            precise: true,
        }
    }

    fn moved(x: f32, y: f32) -> HostEvent {
        HostEvent::Move {
            pos: p(x, y),
            precise: true,
        }
    }

    fn started() -> CropTool {
        let mut tool = CropTool::default();
        tool.invoke(&ctx(Some(plane())), Snapping::default())
            .expect("plane is croppable");
        tool
    }

    #[test]
    fn invoke_projects_mesh_into_outer_quad() {
        let mut tool = CropTool::default();
        let reqs = tool
            .invoke(&ctx(Some(plane())), Snapping::default())
            .expect("plane is croppable");

        assert_eq!(reqs, vec![HostRequest::AddDrawHandler, HostRequest::TagRedraw]);
        assert!(tool.has_draw_handler());

        let quad = tool.selection().quad().expect("quad stored");
        assert_eq!(
            quad.corners(),
            &[p(50.0, 25.0), p(150.0, 25.0), p(150.0, 75.0), p(50.0, 75.0)]
        );
        assert!(!tool.selection().is_dragging());
        assert_eq!(tool.selection().vertices(), [None, None]);
    }

    #[test]
    fn preconditions_leave_tool_inactive() {
        let mut tool = CropTool::default();

        let mut wrong_area = ctx(Some(plane()));
        wrong_area.area = AreaKind::Other;
        assert_eq!(
            tool.invoke(&wrong_area, Snapping::default()),
            Err(PreconditionError::NoViewport)
        );

        assert_eq!(
            tool.invoke(&ctx(None), Snapping::default()),
            Err(PreconditionError::NoActiveObject)
        );

        let mut curve = plane();
        curve.kind = ObjectKind::Curve;
        assert!(matches!(
            tool.invoke(&ctx(Some(curve)), Snapping::default()),
            Err(PreconditionError::NotAMesh { .. })
        ));

        let mut editing = plane();
        editing.mode = InteractionMode::Edit;
        assert!(matches!(
            tool.invoke(&ctx(Some(editing)), Snapping::default()),
            Err(PreconditionError::WrongMode { .. })
        ));

        let mut tri = plane();
        tri.vertices = vec![[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]];
        assert_eq!(
            tool.invoke(&ctx(Some(tri)), Snapping::default()),
            Err(PreconditionError::Quad(QuadError::NotAQuad { corners: 3 }))
        );

        assert!(!tool.is_active());
        assert!(!tool.has_draw_handler());
        assert!(tool.overlay().is_none());
    }

    #[test]
    fn full_drag_commits_and_detaches() {
        let mut tool = started();

        assert_eq!(tool.handle(press(60.0, 30.0)).0, ModalStatus::Running);
        assert_eq!(
            tool.handle(moved(140.0, 70.0)),
            (ModalStatus::Running, vec![HostRequest::TagRedraw])
        );

        let (status, reqs) = tool.handle(press(140.0, 70.0));
        assert_eq!(status, ModalStatus::Finished);
        assert_eq!(reqs.len(), 3);
        let HostRequest::Commit { regions } = &reqs[0] else {
            panic!("expected commit first, got {reqs:?}");
        };
        assert_eq!(
            regions[0].0,
            [p(50.0, 25.0), p(60.0, 30.0), p(60.0, 70.0), p(50.0, 75.0)]
        );
        assert_eq!(&reqs[1..], &[HostRequest::RemoveDrawHandler, HostRequest::TagRedraw]);

        assert!(!tool.is_active());
        assert!(!tool.has_draw_handler());
    }

    #[test]
    fn degenerate_commit_finishes_without_regions() {
        let mut tool = started();
        tool.handle(press(80.0, 40.0));
        let (status, reqs) = tool.handle(press(80.0, 60.0));
        assert_eq!(status, ModalStatus::Finished);
        assert_eq!(reqs, vec![HostRequest::RemoveDrawHandler, HostRequest::TagRedraw]);
        assert!(!tool.is_active());
    }

    #[test]
    fn cancel_during_drag_resets_everything() {
        let mut tool = started();
        tool.handle(press(60.0, 30.0));
        tool.handle(moved(100.0, 60.0));

        let (status, reqs) = tool.handle(HostEvent::Key(Key::Escape));
        assert_eq!(status, ModalStatus::Cancelled);
        assert_eq!(reqs, vec![HostRequest::RemoveDrawHandler, HostRequest::TagRedraw]);
        assert_eq!(tool.selection(), &SelectionState::default());

        let mut tool = started();
        tool.handle(press(60.0, 30.0));
        let (status, _) = tool.handle(HostEvent::Press {
            button: Button::Secondary,
            pos: p(0.0, 0.0),
            precise: false,
        });
        assert_eq!(status, ModalStatus::Cancelled);
        assert!(!tool.is_active());
    }

    #[test]
    fn host_cancel_and_reinvoke() {
        let mut tool = started();
        tool.handle(press(60.0, 30.0));
        assert_eq!(
            tool.cancel(),
            vec![HostRequest::RemoveDrawHandler, HostRequest::TagRedraw]
        );
        assert!(tool.cancel().is_empty());

        let mut tool = started();
        tool.handle(press(60.0, 30.0));
        let reqs = tool
            .invoke(&ctx(Some(plane())), Snapping::default())
            .expect("plane is croppable");
        assert_eq!(
            reqs,
            vec![
                HostRequest::RemoveDrawHandler,
                HostRequest::TagRedraw,
                HostRequest::AddDrawHandler,
                HostRequest::TagRedraw,
            ]
        );
        assert!(!tool.selection().is_dragging());
    }

    #[test]
    fn refusal_is_reported_as_a_warning() {
        let mut tool = CropTool::default();
        let err = tool
            .invoke(&ctx(None), Snapping::default())
            .expect_err("no active object");

        assert_eq!(
            HostRequest::refused(&err),
            HostRequest::Report {
                level: ReportLevel::Warning,
                message: "no active object".into(),
            }
        );

        let wrong_area = InvokeContext {
            area: AreaKind::Other,
            ..ctx(Some(plane()))
        };
        let err = tool
            .invoke(&wrong_area, Snapping::default())
            .expect_err("not a 3D view");
        assert!(matches!(
            HostRequest::refused(&err),
            HostRequest::Report { message, .. } if message == "View3D not found, cannot run operator"
        ));
    }

    #[test]
    fn failed_reinvoke_keeps_running_interaction() {
        let mut tool = started();
        tool.handle(press(60.0, 30.0));

        assert_eq!(
            tool.invoke(&ctx(None), Snapping::default()),
            Err(PreconditionError::NoActiveObject)
        );
        assert!(tool.selection().is_dragging());
        assert!(tool.has_draw_handler());
    }

    #[test]
    fn unrelated_events_pass_through_with_redraw() {
        let mut tool = started();
        assert_eq!(
            tool.handle(HostEvent::None),
            (ModalStatus::PassThrough, vec![HostRequest::TagRedraw])
        );

        let mut idle = CropTool::default();
        assert_eq!(idle.handle(press(1.0, 1.0)), (ModalStatus::PassThrough, vec![]));
    }

    #[test]
    fn overlay_follows_tool_state() {
        let mut tool = started();
        assert!(tool.overlay().is_some());
        tool.handle(press(60.0, 30.0));
        tool.handle(moved(120.0, 60.0));
        assert_eq!(tool.overlay().expect("active").shaded.len(), 4);
    }
}
