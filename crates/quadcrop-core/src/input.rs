// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::point::Point2;
use crate::selection::{PointerInput, ToolEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    Other(u32),
}

/// Raw event as delivered by the viewport host, in region coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    Press {
        button: Button,
        pos: Point2,
        precise: bool,
    },
    Release {
        button: Button,
        pos: Point2,
    },
    Move {
        pos: Point2,
        precise: bool,
    },
    Key(Key),
    /// Timer ticks, window events, anything without a meaning here.
    None,
}

impl From<HostEvent> for ToolEvent {
    fn from(ev: HostEvent) -> Self {
        match ev {
            HostEvent::Press {
                button: Button::Primary,
                pos,
                precise,
            } => ToolEvent::Press(PointerInput { pos, precise }),

            HostEvent::Press {
                button: Button::Secondary,
                ..
            }
            | HostEvent::Key(Key::Escape) => ToolEvent::Cancel,

            HostEvent::Move { pos, precise } => ToolEvent::Move(PointerInput { pos, precise }),

            HostEvent::Press { .. } | HostEvent::Release { .. } | HostEvent::Key(_) | HostEvent::None => {
                ToolEvent::PassThrough
            }
        }
    }
}
