// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};
use quadcrop_core::{HostEvent, InvokeContext, ModalStatus, Overlay, Region, ReportLevel};

pub const IPC_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Wire {
    Response(Response),
    Event(Event),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcHello {
    pub version: u32,
}

/// Host → daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Request {
    Hello(IpcHello),

    /// Start the crop tool over the active object. Replaces a running one.
    Invoke { context: InvokeContext },

    /// Forward one viewport event (pointer, key, or anything else).
    Input { event: HostEvent },

    /// Draw callback: fetch what to paint this frame.
    Overlay,

    Cancel,
    Status,

    /// Stop the daemon after answering.
    Shutdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Response {
    Ok,

    /// Outcome of Input, mirrors the modal operator return value.
    Modal { status: ModalStatus },

    Status {
        active: bool,
        dragging: bool,
        snapped: bool,
    },

    Overlay { overlay: Option<Overlay> },

    Error { message: String },
}

/// Daemon → host side effects, sent before the response they belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    DrawHandlerAdded,
    DrawHandlerRemoved,

    /// Tag the viewport for redraw.
    Redraw,

    /// Final regions, already handed to the crop consumer.
    Committed { regions: Vec<Region> },

    Report { level: ReportLevel, message: String },
}
