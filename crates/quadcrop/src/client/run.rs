// Author: Dustin Pilgrim
// License: MIT

use quadcrop_core::{
    Button, HostEvent, InvokeContext, Key, Point2, SceneObject, ViewInfo,
};
use quadcrop_ipc::{Request, Response};

use eventline::{debug, info};

use crate::cli::{Args, Cmd, InvokeArgs};
use crate::{mesh, paths};

use super::{ipc, print};

pub fn run(args: Args) -> Result<(), String> {
    info!("starting client");
    debug!("parsed args: {:?}", args.cmd);

    let socket = args.socket.unwrap_or_else(paths::default_socket_path);
    debug!("socket: {}", socket.display());

    // Build the request before connecting so bad input never reaches the daemon.
    let req = match args.cmd {
        Cmd::Status => Request::Status,
        Cmd::Invoke(inv) => Request::Invoke {
            context: invoke_context(inv)?,
        },
        Cmd::Press {
            x,
            y,
            precise,
            secondary,
        } => Request::Input {
            event: HostEvent::Press {
                button: if secondary {
                    Button::Secondary
                } else {
                    Button::Primary
                },
                pos: Point2::new(x, y),
                precise,
            },
        },
        Cmd::Move { x, y, precise } => Request::Input {
            event: HostEvent::Move {
                pos: Point2::new(x, y),
                precise,
            },
        },
        Cmd::Escape => Request::Input {
            event: HostEvent::Key(Key::Escape),
        },
        Cmd::Overlay => Request::Overlay,
        Cmd::Cancel => Request::Cancel,
        Cmd::Shutdown => Request::Shutdown,
    };

    let mut client = ipc::connect(&socket)?;
    info!("connected to daemon");

    let (resp, events) = ipc::call(&mut client, req)?;
    print::print_events(&events);

    if let Response::Error { message } = resp {
        return Err(format!("quadcrop: {message}"));
    }
    print::print_response(resp);

    info!("client done");
    Ok(())
}

fn invoke_context(inv: InvokeArgs) -> Result<InvokeContext, String> {
    let mesh = mesh::load_obj(&inv.mesh)?;
    info!(
        "loaded {} vertices from {}",
        mesh.vertices.len(),
        inv.mesh.display()
    );

    let mut view = ViewInfo::identity(inv.width, inv.height);
    if let Some(values) = &inv.view_proj {
        view.view_proj = mesh::view_proj_from_args(values)?;
    }

    let name = mesh.name.unwrap_or_else(|| {
        inv.mesh
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Mesh".into())
    });

    Ok(InvokeContext {
        area: inv.area,
        object: Some(SceneObject {
            name,
            kind: inv.kind,
            mode: inv.mode,
            vertices: mesh.vertices,
        }),
        view,
    })
}
