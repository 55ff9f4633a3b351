// Author: Dustin Pilgrim
// License: MIT

use eventline::{debug, info};
use quadcrop_core::Region;

/// Consumer of committed regions.
pub trait CropSink {
    fn crop(&mut self, regions: &[Region; 4]) -> Result<(), String>;
}

/// Logs each region and keeps nothing. Pixel cropping is left to the host.
#[derive(Debug, Default)]
pub struct LogCropSink {
    committed: u64,
}

impl CropSink for LogCropSink {
    fn crop(&mut self, regions: &[Region; 4]) -> Result<(), String> {
        self.committed += 1;
        info!("crop #{}: {} regions", self.committed, regions.len());

        for (id, region) in regions.iter().enumerate() {
            let pts: Vec<(f32, f32)> = region.points().iter().map(|p| (p.x, p.y)).collect();
            debug!("region {id}: vertices={pts:?} area={:.1}", region.area());
        }

        Ok(())
    }
}
