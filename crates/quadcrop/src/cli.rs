// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use quadcrop_core::{AreaKind, InteractionMode, ObjectKind};

#[derive(Debug, Parser)]
#[command(
    name = "quadcrop",
    version,
    about = "quadcrop: drive the crop tool from the command line"
)]
pub struct Args {
    /// Override IPC socket path (default: $XDG_RUNTIME_DIR/quadcrop/quadcrop.sock)
    #[arg(long)]
    pub socket: Option<PathBuf>,

    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/quadcrop/quadcrop.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Show tool session status
    Status,

    /// Start the crop tool over a mesh read from a Wavefront OBJ file
    Invoke(InvokeArgs),

    /// Mouse press at region coordinates (primary button unless --secondary)
    Press {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Hold the precision modifier (disables snapping)
        #[arg(long)]
        precise: bool,
        /// Use the secondary button (cancels the tool)
        #[arg(long)]
        secondary: bool,
    },

    /// Pointer motion at region coordinates
    Move {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Hold the precision modifier (disables snapping)
        #[arg(long)]
        precise: bool,
    },

    /// Send the Escape key
    Escape,

    /// Print the current draw list
    Overlay,

    /// Cancel the running tool from outside the event stream
    Cancel,

    /// Stop the daemon
    Shutdown,
}

#[derive(Debug, clap::Args)]
pub struct InvokeArgs {
    /// Mesh file; `v x y z` lines are read as world-space vertices
    #[arg(long)]
    pub mesh: PathBuf,

    /// Column-major view-projection matrix, 16 values (default: identity)
    #[arg(long, num_args = 16, value_name = "F", allow_negative_numbers = true)]
    pub view_proj: Option<Vec<f32>>,

    /// Region width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Region height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    #[arg(long, value_enum, default_value_t = InteractionMode::Object)]
    pub mode: InteractionMode,

    #[arg(long, value_enum, default_value_t = ObjectKind::Mesh)]
    pub kind: ObjectKind,

    #[arg(long, value_enum, default_value_t = AreaKind::View3d)]
    pub area: AreaKind,
}
