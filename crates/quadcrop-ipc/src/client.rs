// Author: Dustin Pilgrim
// License: MIT

use std::collections::VecDeque;
use std::os::unix::net::UnixStream;
use std::path::Path;

use crate::error::{IpcError, Result};
use crate::framing::{recv_msg, send_msg, MAX_FRAME};
use crate::protocol::{Event, IpcHello, Request, Response, Wire, IPC_VERSION};

/// Host side of the connection.
///
/// Events arriving ahead of a response are queued; drain them with
/// [`IpcClient::take_events`] after each call.
pub struct IpcClient {
    stream: UnixStream,
    max_frame: usize,
    pending_events: VecDeque<Event>,
}

impl IpcClient {
    pub fn connect(socket_path: impl AsRef<Path>) -> Result<Self> {
        let stream = UnixStream::connect(socket_path)?;
        Self::from_stream(stream)
    }

    /// Handshake over an already connected stream.
    pub fn from_stream(stream: UnixStream) -> Result<Self> {
        let mut this = Self {
            stream,
            max_frame: MAX_FRAME,
            pending_events: VecDeque::new(),
        };

        let resp = this.call(Request::Hello(IpcHello { version: IPC_VERSION }))?;
        match resp {
            Response::Ok => Ok(this),
            Response::Error { message } => Err(IpcError::Remote(message)),
            _ => Err(IpcError::Remote("unexpected hello response".into())),
        }
    }

    pub fn call(&mut self, req: Request) -> Result<Response> {
        send_msg(&mut self.stream, &req)?;

        loop {
            match recv_msg(&mut self.stream, self.max_frame)? {
                Wire::Response(resp) => return Ok(resp),
                Wire::Event(ev) => self.pending_events.push_back(ev),
            }
        }
    }

    /// Events received so far, oldest first.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.pending_events.drain(..).collect()
    }
}
