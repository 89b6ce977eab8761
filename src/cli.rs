//! Command-line overrides for native builds.

use clap::Parser;

use infinite_hexagons::scroll::ScrollConfig;
use infinite_hexagons::tiles::TileConfig;

/// Infinite hexagon viewer.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Hexagon circumradius in pixels.
    #[arg(long, value_parser = positive)]
    pub radius: Option<f64>,
    /// Gap between adjacent hexagons in pixels.
    #[arg(long, value_parser = non_negative)]
    pub spacing: Option<f64>,
    /// Initial horizontal scroll offset (defaults to the middle of the surface).
    #[arg(long, value_parser = non_negative)]
    pub start_x: Option<f64>,
    /// Initial vertical scroll offset (defaults to the middle of the surface).
    #[arg(long, value_parser = non_negative)]
    pub start_y: Option<f64>,
}

impl Cli {
    /// Writes the given overrides into the plugin configs.
    pub fn apply(&self, tiles: &mut TileConfig, scroll: &mut ScrollConfig) {
        if let Some(radius) = self.radius {
            tiles.geometry.radius = radius;
        }
        if let Some(spacing) = self.spacing {
            tiles.geometry.spacing = spacing;
        }
        if let Some(x) = self.start_x {
            scroll.start_offset.x = x;
        }
        if let Some(y) = self.start_y {
            scroll.start_offset.y = y;
        }
    }
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{s:?} is not a number: {e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("{s:?} is not finite"))
    }
}

fn positive(s: &str) -> Result<f64, String> {
    let v = parse_finite(s)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(format!("{v} must be greater than zero"))
    }
}

fn non_negative(s: &str) -> Result<f64, String> {
    let v = parse_finite(s)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(format!("{v} must not be negative"))
    }
}
