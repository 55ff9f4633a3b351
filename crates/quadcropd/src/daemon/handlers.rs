// Author: Dustin Pilgrim
// License: MIT

use quadcrop_core::{HostRequest, ModalStatus, ReportLevel};
use quadcrop_ipc::{ClientConn, Event, Request, Response};

use eventline::{debug, error, info, warn};

use crate::crop::CropSink;

use super::state::DaemonState;

/// Serve one request: events first, then the response for the caller to send.
pub fn handle_request(state: &mut DaemonState, conn: &mut ClientConn, req: Request) -> Response {
    match &req {
        Request::Invoke { context } => info!(
            "Invoke: area={:?} object={:?}",
            context.area,
            context.object.as_ref().map(|o| o.name.as_str())
        ),
        Request::Input { event } => debug!("Input: {:?}", event),
        other => debug!("request: {:?}", other),
    }

    let (events, resp) = dispatch(state, req);

    for ev in events {
        match &ev {
            Event::Report { level: ReportLevel::Error, message } => error!("{message}"),
            Event::Report { level: ReportLevel::Warning, message } => warn!("{message}"),
            Event::Committed { regions } => info!("committed {} regions", regions.len()),
            _ => {}
        }

        debug!("sending event to client: {:?}", ev);
        if let Err(e) = conn.send_event(ev) {
            warn!("failed to send event: {e}");
        }
    }

    resp
}

/// Apply a request to the daemon state.
pub fn dispatch(state: &mut DaemonState, req: Request) -> (Vec<Event>, Response) {
    match req {
        Request::Hello(_) => (
            Vec::new(),
            Response::Error {
                message: "hello already received".into(),
            },
        ),

        Request::Invoke { context } => match state.tool.invoke(&context, state.cfg.snapping()) {
            Ok(requests) => (forward(requests, state.sink.as_mut()), Response::Ok),
            Err(e) => (
                forward(vec![HostRequest::refused(&e)], state.sink.as_mut()),
                Response::Error {
                    message: e.to_string(),
                },
            ),
        },

        Request::Input { event } => {
            let (status, requests) = state.tool.handle(event);
            (forward(requests, state.sink.as_mut()), Response::Modal { status })
        }

        Request::Overlay => (
            Vec::new(),
            Response::Overlay {
                overlay: state.tool.overlay(),
            },
        ),

        Request::Cancel => {
            let was_active = state.tool.is_active();
            let events = forward(state.tool.cancel(), state.sink.as_mut());
            let resp = if was_active {
                Response::Modal {
                    status: ModalStatus::Cancelled,
                }
            } else {
                Response::Ok
            };
            (events, resp)
        }

        Request::Status => {
            let sel = state.tool.selection();
            (
                Vec::new(),
                Response::Status {
                    active: sel.is_active(),
                    dragging: sel.is_dragging(),
                    snapped: sel.is_snapped(),
                },
            )
        }

        Request::Shutdown => {
            state.shutdown_requested = true;
            let events = forward(state.tool.cancel(), state.sink.as_mut());
            (events, Response::Ok)
        }
    }
}

/// Turn tool side effects into host events. Commits go through the sink first.
fn forward(requests: Vec<HostRequest>, sink: &mut dyn CropSink) -> Vec<Event> {
    requests
        .into_iter()
        .map(|req| match req {
            HostRequest::AddDrawHandler => Event::DrawHandlerAdded,
            HostRequest::RemoveDrawHandler => Event::DrawHandlerRemoved,
            HostRequest::TagRedraw => Event::Redraw,
            HostRequest::Commit { regions } => match sink.crop(&regions) {
                Ok(()) => Event::Committed {
                    regions: regions.to_vec(),
                },
                Err(message) => Event::Report {
                    level: ReportLevel::Error,
                    message: format!("crop failed: {message}"),
                },
            },
            HostRequest::Report { level, message } => Event::Report { level, message },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use quadcrop_core::{
        AreaKind, Button, HostEvent, InteractionMode, InvokeContext, Key, ObjectKind, Point2,
        Region, SceneObject, ViewInfo,
    };

    use crate::config::QuadcropConfig;

    #[derive(Default, Clone)]
    struct Recorder {
        crops: Rc<RefCell<Vec<[Region; 4]>>>,
        fail: bool,
    }

    impl CropSink for Recorder {
        fn crop(&mut self, regions: &[Region; 4]) -> Result<(), String> {
            if self.fail {
                return Err("disk full".into());
            }
            self.crops.borrow_mut().push(*regions);
            Ok(())
        }
    }

    fn state_with(sink: Recorder) -> DaemonState {
        DaemonState::new(QuadcropConfig::default(), Box::new(sink))
    }

    fn plane_context(mode: InteractionMode) -> InvokeContext {
        InvokeContext {
            area: AreaKind::View3d,
            object: Some(SceneObject {
                name: "Plane".into(),
                kind: ObjectKind::Mesh,
                mode,
                vertices: vec![
                    [-0.5, -0.5, 0.0],
                    [0.5, -0.5, 0.0],
                    [0.5, 0.5, 0.0],
                    [-0.5, 0.5, 0.0],
                ],
            }),
            view: ViewInfo::identity(200, 100),
        }
    }

    fn press(x: f32, y: f32) -> Request {
        Request::Input {
            event: HostEvent::Press {
                button: Button::Primary,
                pos: Point2::new(x, y),
                precise: true,
            },
        }
    }

    #[test]
    fn invoke_registers_draw_handler() {
        let mut state = state_with(Recorder::default());
        let (events, resp) = dispatch(
            &mut state,
            Request::Invoke {
                context: plane_context(InteractionMode::Object),
            },
        );

        assert!(matches!(resp, Response::Ok));
        assert!(matches!(events.as_slice(), [Event::DrawHandlerAdded, Event::Redraw]));
        assert!(state.tool.is_active());
    }

    #[test]
    fn failed_invoke_reports_a_warning() {
        let mut state = state_with(Recorder::default());
        let (events, resp) = dispatch(
            &mut state,
            Request::Invoke {
                context: plane_context(InteractionMode::Edit),
            },
        );

        let Response::Error { message } = resp else {
            panic!("expected error, got {resp:?}");
        };
        assert!(matches!(
            events.as_slice(),
            [Event::Report { level: ReportLevel::Warning, message: m }] if *m == message
        ));
        assert!(!state.tool.is_active());
    }

    #[test]
    fn second_press_commits_through_the_sink() {
        let sink = Recorder::default();
        let crops = Rc::clone(&sink.crops);
        let mut state = state_with(sink);

        dispatch(
            &mut state,
            Request::Invoke {
                context: plane_context(InteractionMode::Object),
            },
        );

        let (_, resp) = dispatch(&mut state, press(70.0, 40.0));
        assert!(matches!(resp, Response::Modal { status: ModalStatus::Running }));

        let (events, resp) = dispatch(&mut state, press(120.0, 60.0));
        assert!(matches!(resp, Response::Modal { status: ModalStatus::Finished }));
        assert!(matches!(
            events.as_slice(),
            [
                Event::Committed { .. },
                Event::DrawHandlerRemoved,
                Event::Redraw
            ]
        ));

        let crops = crops.borrow();
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0][0].points()[0], Point2::new(50.0, 25.0));
        assert!(!state.tool.is_active());
    }

    #[test]
    fn sink_failure_becomes_an_error_report() {
        let mut state = state_with(Recorder {
            fail: true,
            ..Recorder::default()
        });

        dispatch(
            &mut state,
            Request::Invoke {
                context: plane_context(InteractionMode::Object),
            },
        );
        dispatch(&mut state, press(70.0, 40.0));
        let (events, _) = dispatch(&mut state, press(120.0, 60.0));

        assert!(matches!(
            events.first(),
            Some(Event::Report {
                level: ReportLevel::Error,
                ..
            })
        ));
        assert!(!state.tool.is_active());
    }

    #[test]
    fn escape_and_cancel_reset_the_session() {
        let mut state = state_with(Recorder::default());
        dispatch(
            &mut state,
            Request::Invoke {
                context: plane_context(InteractionMode::Object),
            },
        );

        let (events, resp) = dispatch(
            &mut state,
            Request::Input {
                event: HostEvent::Key(Key::Escape),
            },
        );
        assert!(matches!(resp, Response::Modal { status: ModalStatus::Cancelled }));
        assert!(matches!(events.as_slice(), [Event::DrawHandlerRemoved, Event::Redraw]));

        let (events, resp) = dispatch(&mut state, Request::Cancel);
        assert!(matches!(resp, Response::Ok));
        assert!(events.is_empty());
    }

    #[test]
    fn status_tracks_the_drag() {
        let mut state = state_with(Recorder::default());
        let (_, resp) = dispatch(&mut state, Request::Status);
        assert!(matches!(
            resp,
            Response::Status {
                active: false,
                dragging: false,
                snapped: false
            }
        ));

        dispatch(
            &mut state,
            Request::Invoke {
                context: plane_context(InteractionMode::Object),
            },
        );
        dispatch(&mut state, press(70.0, 40.0));

        let (_, resp) = dispatch(&mut state, Request::Status);
        assert!(matches!(
            resp,
            Response::Status {
                active: true,
                dragging: true,
                ..
            }
        ));

        let (_, resp) = dispatch(&mut state, Request::Overlay);
        assert!(matches!(resp, Response::Overlay { overlay: Some(_) }));
    }

    #[test]
    fn shutdown_tears_down_a_running_session() {
        let mut state = state_with(Recorder::default());
        dispatch(
            &mut state,
            Request::Invoke {
                context: plane_context(InteractionMode::Object),
            },
        );

        let (events, resp) = dispatch(&mut state, Request::Shutdown);
        assert!(matches!(resp, Response::Ok));
        assert!(state.shutdown_requested);
        assert!(matches!(events.as_slice(), [Event::DrawHandlerRemoved, Event::Redraw]));
    }
}
