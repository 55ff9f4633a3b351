// Author: Dustin Pilgrim
// License: MIT

mod config;
mod crop;
mod daemon;
mod logging;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "quadcropd", version, about = "quadcrop daemon: four-region crop tool session")]
struct Args {
    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/quadcrop/quadcropd.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Override IPC socket path (default: $XDG_RUNTIME_DIR/quadcrop/quadcrop.sock)
    #[arg(long)]
    socket: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .unwrap_or_else(|| daemon::default_log_path("quadcropd.log"));

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // Logging is not up yet.
        eprintln!("quadcropd: failed to init logging: {e}");
        std::process::exit(1);
    }

    eventline::info!("quadcropd starting");
    eventline::debug!("verbose={}", args.verbose);
    eventline::debug!("log_path={}", log_path.display());

    let socket = args.socket.unwrap_or_else(daemon::default_socket_path);

    if let Err(e) = daemon::run(&socket, args.verbose) {
        eventline::error!("fatal error: {e}");
        std::process::exit(1);
    }
}
