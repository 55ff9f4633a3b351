// Author: Dustin Pilgrim
// License: MIT

use std::os::unix::fs::FileTypeExt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use eventline::{debug, info, warn};
use quadcrop_ipc::{ClientConn, IpcServer};

use crate::config::{self, QuadcropConfig};
use crate::crop::LogCropSink;

use super::handlers::handle_request;
use super::instance_lock::{InstanceLock, LockError};
use super::paths::ensure_parent_dir;
use super::state::DaemonState;

fn cleanup_stale_socket(sock: &Path) -> std::io::Result<()> {
    if !sock.exists() {
        return Ok(());
    }

    let md = std::fs::symlink_metadata(sock)?;
    if md.file_type().is_socket() {
        std::fs::remove_file(sock)
    } else {
        Err(std::io::Error::other(format!(
            "socket path exists but is not a unix socket: {}",
            sock.display()
        )))
    }
}

pub fn run(sock: &Path, verbose: bool) -> Result<(), String> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!("failed to load config (using defaults): {e}");
            QuadcropConfig::default()
        }
    };

    info!("socket path: {}", sock.display());
    ensure_parent_dir(sock).map_err(|e| format!("create socket dir: {e}"))?;

    let _lock = match InstanceLock::acquire_for_socket(sock) {
        Ok(l) => {
            debug!("acquired singleton lock at {}", l.path().display());
            l
        }
        Err(e @ LockError::AlreadyRunning(_)) => {
            warn!("{e}");
            if !verbose {
                eprintln!("quadcropd: {e}");
            }
            return Ok(());
        }
        Err(e) => return Err(format!("failed to acquire singleton lock: {e}")),
    };

    cleanup_stale_socket(sock)
        .map_err(|e| format!("failed to clean up stale socket '{}': {e}", sock.display()))?;

    info!(
        "snap_distance={} accent_colour=0x{:08X} shade_colour=0x{:08X}",
        cfg.snap_distance, cfg.accent_colour, cfg.shade_colour
    );

    let mut state = DaemonState::new(cfg, Box::new(LogCropSink::default()));

    let server = IpcServer::bind(sock).map_err(|e| format!("bind {}: {e}", sock.display()))?;
    server
        .set_nonblocking(true)
        .map_err(|e| format!("set_nonblocking: {e}"))?;
    info!("listening on {}", sock.display());

    let shutdown = Arc::new(AtomicBool::new(false));

    while !shutdown.load(Ordering::Relaxed) {
        let mut conn = match server.accept() {
            Ok(c) => c,
            Err(e) if e.is_would_block() => {
                std::thread::sleep(Duration::from_millis(100));
                continue;
            }
            Err(e) => {
                warn!("accept error: {e}");
                std::thread::sleep(Duration::from_millis(200));
                continue;
            }
        };

        info!("client connected");
        serve_client(&mut state, &mut conn, &shutdown);
        info!("client disconnected");
    }

    info!("daemon shutting down");
    Ok(())
}

fn serve_client(state: &mut DaemonState, conn: &mut ClientConn, shutdown: &AtomicBool) {
    let hello = match conn.recv() {
        Ok(m) => m,
        Err(e) => {
            warn!("no hello from client: {e}");
            return;
        }
    };
    if let Err(e) = conn.handle_hello(&hello) {
        warn!("handshake failed: {e}");
        return;
    }

    while let Ok(req) = conn.recv() {
        let resp = handle_request(state, conn, req);
        debug!("sending response: {:?}", resp);
        if let Err(e) = conn.send(resp) {
            warn!("failed to send response: {e}");
            break;
        }

        if state.shutdown_requested {
            info!("shutdown requested by client");
            shutdown.store(true, Ordering::Relaxed);
            break;
        }
    }
}
