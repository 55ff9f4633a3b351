// Author: Dustin Pilgrim
// License: MIT

use quadcrop_core::CropTool;

use crate::config::QuadcropConfig;
use crate::crop::{CropSink, LogCropSink};

/// Everything that outlives a single client connection.
pub struct DaemonState {
    pub tool: CropTool,
    pub cfg: QuadcropConfig,
    pub sink: Box<dyn CropSink>,
    pub shutdown_requested: bool,
}

impl DaemonState {
    pub fn new(cfg: QuadcropConfig, sink: Box<dyn CropSink>) -> Self {
        Self {
            tool: CropTool::new(cfg.overlay_style()),
            cfg,
            sink,
            shutdown_requested: false,
        }
    }
}

impl Default for DaemonState {
    fn default() -> Self {
        Self::new(QuadcropConfig::default(), Box::new(LogCropSink::default()))
    }
}
