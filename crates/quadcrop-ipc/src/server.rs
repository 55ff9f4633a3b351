// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};

use crate::error::{IpcError, Result};
use crate::framing::{recv_msg, send_msg, MAX_FRAME};
use crate::protocol::{Event, Request, Response, Wire, IPC_VERSION};

pub struct IpcServer {
    listener: UnixListener,
    socket_path: PathBuf,
    max_frame: usize,
}

pub struct ClientConn {
    stream: UnixStream,
    max_frame: usize,
}

impl IpcServer {
    pub fn bind(socket_path: impl AsRef<Path>) -> Result<Self> {
        let socket_path = socket_path.as_ref().to_path_buf();

        // remove stale socket
        let _ = fs::remove_file(&socket_path);

        let listener = UnixListener::bind(&socket_path)?;
        Ok(Self {
            listener,
            socket_path,
            max_frame: MAX_FRAME,
        })
    }

    pub fn accept(&self) -> Result<ClientConn> {
        let (stream, _addr) = self.listener.accept()?;
        // The listener may be non-blocking; requests are read blocking.
        stream.set_nonblocking(false)?;
        Ok(ClientConn::new(stream, self.max_frame))
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn set_nonblocking(&self, nonblocking: bool) -> Result<()> {
        self.listener.set_nonblocking(nonblocking)?;
        Ok(())
    }
}

impl ClientConn {
    pub fn new(stream: UnixStream, max_frame: usize) -> Self {
        Self { stream, max_frame }
    }

    pub fn recv(&mut self) -> Result<Request> {
        recv_msg(&mut self.stream, self.max_frame)
    }

    pub fn send(&mut self, resp: Response) -> Result<()> {
        send_msg(&mut self.stream, &Wire::Response(resp))
    }

    pub fn send_event(&mut self, ev: Event) -> Result<()> {
        send_msg(&mut self.stream, &Wire::Event(ev))
    }

    pub fn handle_hello(&mut self, req: &Request) -> Result<()> {
        match req {
            Request::Hello(h) if h.version == IPC_VERSION => self.send(Response::Ok),
            Request::Hello(h) => {
                let err = IpcError::VersionMismatch {
                    client: h.version,
                    server: IPC_VERSION,
                };
                self.send(Response::Error {
                    message: err.to_string(),
                })?;
                Err(err)
            }
            _ => {
                let err = IpcError::ExpectedHello;
                self.send(Response::Error {
                    message: err.to_string(),
                })?;
                Err(err)
            }
        }
    }
}
