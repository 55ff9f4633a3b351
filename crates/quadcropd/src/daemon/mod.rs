// Author: Dustin Pilgrim
// License: MIT

pub mod handlers;
pub mod instance_lock;
pub mod paths;
pub mod server;
pub mod state;

pub use paths::{default_log_path, default_socket_path};
pub use server::run;
