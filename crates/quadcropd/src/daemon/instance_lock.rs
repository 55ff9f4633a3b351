// Author: Dustin Pilgrim
// License: MIT

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LockError {
    #[error("socket path has no parent dir: {}", .0.display())]
    NoParent(PathBuf),

    #[error("quadcropd already running (lock held at {})", .0.display())]
    AlreadyRunning(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// `quadcropd.lock` next to the socket, holding `pid=<n>`.
/// Removed on drop.
pub struct InstanceLock {
    path: PathBuf,
    file: File,
}

impl InstanceLock {
    pub fn acquire_for_socket(sock_path: &Path) -> Result<Self, LockError> {
        let dir = sock_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| LockError::NoParent(sock_path.to_path_buf()))?;

        Self::acquire(dir.join("quadcropd.lock"))
    }

    fn acquire(lock_path: PathBuf) -> Result<Self, LockError> {
        // Owner died without cleaning up: take over.
        if lock_path.exists() && is_lock_stale(&lock_path) {
            let _ = fs::remove_file(&lock_path);
        }

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(LockError::AlreadyRunning(lock_path));
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(file, "pid={}", std::process::id())?;

        Ok(Self {
            path: lock_path,
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = self.file.flush();
        let _ = fs::remove_file(&self.path);
    }
}

fn is_lock_stale(lock_path: &Path) -> bool {
    let mut s = String::new();
    if File::open(lock_path)
        .and_then(|mut f| f.read_to_string(&mut s))
        .is_err()
    {
        return false;
    }

    let Some(pid) = s
        .lines()
        .find_map(|l| l.strip_prefix("pid="))
        .and_then(|v| v.trim().parse::<u32>().ok())
    else {
        return false;
    };

    // Without /proc there is no reliable liveness check.
    let proc = Path::new("/proc");
    if !proc.exists() {
        return false;
    }

    !proc.join(pid.to_string()).exists()
}
