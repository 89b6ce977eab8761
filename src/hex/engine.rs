use bevy::log::debug;
use bevy::math::DVec2;

use super::{HexColor, HexGeometry, HexIndex, Viewport, VisibleRange, color_for, visible_range};
use crate::math;

/// Everything the renderer needs to draw one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileLayout {
    /// Tile center relative to the viewport's top-left corner.
    pub position: DVec2,
    /// Falloff weight clamped to `[0, 1]`; `0` at the viewport center.
    pub weight: f64,
    /// Palette color of the tile.
    pub color: HexColor,
}

impl TileLayout {
    /// Layout returned for malformed input: at the origin, undimmed, gray.
    pub const INERT: Self = Self {
        position: DVec2::ZERO,
        weight: 0.0,
        color: HexColor::FALLBACK,
    };
}

/// The two entry points the host consumes, bound to one geometry.
///
/// `Copy` and stateless; every call is a pure function of its arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridEngine {
    geometry: HexGeometry,
}

impl GridEngine {
    /// Binds the engine to a geometry.
    pub const fn new(geometry: HexGeometry) -> Self {
        Self { geometry }
    }

    /// The geometry every call uses.
    pub fn geometry(&self) -> &HexGeometry {
        &self.geometry
    }

    /// Tiles to materialize for a viewport at `offset` with `size`.
    ///
    /// Empty for non-finite input or a negative size.
    pub fn visible_indices(&self, offset: DVec2, size: DVec2) -> VisibleRange {
        let viewport = Viewport::new(offset, size);
        if !viewport.is_valid() {
            debug!("rejecting malformed viewport offset={offset} size={size}");
        }
        visible_range(&self.geometry, &viewport)
    }

    /// Screen position, dimming weight, and color of one tile.
    ///
    /// Returns [`TileLayout::INERT`] when the viewport or geometry is malformed.
    pub fn tile_layout(&self, index: HexIndex, offset: DVec2, size: DVec2) -> TileLayout {
        let viewport = Viewport::new(offset, size);
        if !viewport.is_valid() || !self.geometry.is_valid() {
            return TileLayout::INERT;
        }
        let position = self.geometry.position(index, offset);
        let local_center = size / 2.0;
        let weight = math::falloff_weight(position, local_center, size).clamp(0.0, 1.0);
        TileLayout {
            position,
            weight,
            color: color_for(index),
        }
    }
}
