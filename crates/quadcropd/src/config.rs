// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::PathBuf;

use quadcrop_core::overlay::{DEFAULT_ACCENT, DEFAULT_SHADE};
use quadcrop_core::{OverlayStyle, Snapping, SNAP_DISTANCE_SQ};
use rune_cfg::RuneConfig;

/// Overrides `quadcrop.snap_distance` when set.
pub const SNAP_DISTANCE_ENV: &str = "QUADCROP_SNAP_DISTANCE";

#[derive(Debug, Clone, PartialEq)]
pub struct QuadcropConfig {
    /// Squared snap radius in region pixels.
    pub snap_distance: f32,
    pub accent_colour: u32, // ARGB
    pub shade_colour: u32,  // ARGB
}

impl Default for QuadcropConfig {
    fn default() -> Self {
        Self {
            snap_distance: SNAP_DISTANCE_SQ,
            accent_colour: DEFAULT_ACCENT,
            shade_colour: DEFAULT_SHADE,
        }
    }
}

impl QuadcropConfig {
    pub fn snapping(&self) -> Snapping {
        Snapping {
            distance_sq: self.snap_distance,
        }
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            accent_colour: self.accent_colour,
            shade_colour: self.shade_colour,
        }
    }
}

pub fn load() -> Result<QuadcropConfig, String> {
    let path = default_user_config_path();

    let mut cfg = if path.exists() {
        let rc = RuneConfig::from_file(&path).map_err(|e| format!("failed to read config: {e}"))?;
        parse_config(&rc)?
    } else {
        QuadcropConfig::default()
    };

    if let Some(v) = env::var_os(SNAP_DISTANCE_ENV) {
        let s = v.to_string_lossy();
        cfg.snap_distance = parse_snap_distance(&s)
            .map_err(|e| format!("{SNAP_DISTANCE_ENV}: {e}"))?;
    }

    Ok(cfg)
}

fn parse_config(rc: &RuneConfig) -> Result<QuadcropConfig, String> {
    let mut cfg = QuadcropConfig::default();

    if !rc.has("quadcrop") {
        return Ok(cfg);
    }

    // snap_distance
    if let Some(d) = rc
        .get_optional::<f64>("quadcrop.snap_distance")
        .map_err(|e| format!("config error at quadcrop.snap_distance: {e}"))?
    {
        cfg.snap_distance = check_snap_distance(d as f32)
            .map_err(|e| format!("config error at quadcrop.snap_distance: {e}"))?;
    }

    // accent_colour
    if let Some(colour_str) = rc
        .get_optional::<String>("quadcrop.accent_colour")
        .map_err(|e| format!("config error at quadcrop.accent_colour: {e}"))?
    {
        cfg.accent_colour = parse_hex_colour(&colour_str)
            .map_err(|e| format!("config error at quadcrop.accent_colour: {e}"))?;
    }

    // shade_colour
    if let Some(colour_str) = rc
        .get_optional::<String>("quadcrop.shade_colour")
        .map_err(|e| format!("config error at quadcrop.shade_colour: {e}"))?
    {
        cfg.shade_colour = parse_hex_colour(&colour_str)
            .map_err(|e| format!("config error at quadcrop.shade_colour: {e}"))?;
    }

    Ok(cfg)
}

fn parse_snap_distance(s: &str) -> Result<f32, String> {
    let d: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("expected a number, got \"{}\"", s.trim()))?;
    check_snap_distance(d)
}

fn check_snap_distance(d: f32) -> Result<f32, String> {
    if d.is_finite() && d >= 0.0 {
        Ok(d)
    } else {
        Err(format!("snap distance must be a non-negative number, got {d}"))
    }
}

/// `#RRGGBB` (opaque) or `#AARRGGBB`.
fn parse_hex_colour(s: &str) -> Result<u32, String> {
    let hex = s
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| "colour must start with #".to_string())?;

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("invalid hex colour".into());
    }

    let value = u32::from_str_radix(hex, 16).map_err(|_| "invalid hex colour".to_string())?;

    match hex.len() {
        6 => Ok(0xFF00_0000 | value),
        8 => Ok(value),
        _ => Err("colour must be 6 or 8 hex digits (RRGGBB or AARRGGBB)".into()),
    }
}

fn default_user_config_path() -> PathBuf {
    let dir: PathBuf = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config")
    };

    dir.join("quadcrop").join("quadcrop.rune")
}
