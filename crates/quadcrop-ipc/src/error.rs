// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IpcError>;

#[derive(Debug, Error)]
pub enum IpcError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Ser(#[from] postcard::Error),

    #[error("frame too large")]
    FrameTooLarge,

    #[error("version mismatch (host {client}, daemon {server})")]
    VersionMismatch { client: u32, server: u32 },

    #[error("expected hello as the first message")]
    ExpectedHello,

    #[error("quadcropd returned error: {0}")]
    Remote(String),
}

impl IpcError {
    /// Non-blocking accept with nothing pending.
    pub fn is_would_block(&self) -> bool {
        matches!(self, IpcError::Io(e) if e.kind() == std::io::ErrorKind::WouldBlock)
    }
}
