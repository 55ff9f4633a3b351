// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use quadcrop_ipc::Result;

/// Runtime dir for IPC files (socket + lock).
/// Prefers XDG_RUNTIME_DIR, falls back to /tmp.
fn runtime_ipc_dir() -> PathBuf {
    std::env::var_os("XDG_RUNTIME_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("quadcrop")
}

/// `$XDG_RUNTIME_DIR/quadcrop/quadcrop.sock`
pub fn default_socket_path() -> PathBuf {
    runtime_ipc_dir().join("quadcrop.sock")
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub fn default_log_path(file: &str) -> PathBuf {
    let base = std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    base.join("quadcrop").join(file)
}
