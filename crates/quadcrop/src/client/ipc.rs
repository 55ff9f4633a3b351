// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use quadcrop_ipc::{Event, IpcClient, Request, Response};
use eventline::{debug, error};

pub fn connect(socket: &Path) -> Result<IpcClient, String> {
    IpcClient::connect(socket).map_err(|e| {
        error!("failed to connect to daemon: {e}");

        format!(
            "quadcrop: cannot connect to quadcropd at {}\n\
             → {}\n\
             Hint: start the daemon with `quadcropd`.",
            socket.display(),
            e
        )
    })
}

/// One round trip; returns the response and every event that preceded it.
pub fn call(client: &mut IpcClient, req: Request) -> Result<(Response, Vec<Event>), String> {
    debug!("request: {:?}", req);
    let resp = client.call(req).map_err(|e| format!("{e}"))?;
    let events = client.take_events();
    debug!("response: {:?} ({} events)", resp, events.len());
    Ok((resp, events))
}
