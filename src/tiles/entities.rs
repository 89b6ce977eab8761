use std::f32::consts::{FRAC_PI_2, PI};

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use super::TileConfig;
use crate::hex::{HexColor, HexIndex, VisibleRange};
use crate::math;

/// Marker on a materialized tile, carrying its grid index.
#[derive(Component, Reflect)]
pub struct HexTile {
    /// The cell this entity draws.
    pub index: HexIndex,
}

/// Tap-to-flip state of one tile.
///
/// `progress` runs linearly toward `1` while flipped and back toward `0`
/// otherwise; the rendered angle eases over it.
#[derive(Component, Reflect, Default, Clone, Copy, Debug, PartialEq)]
pub struct TileFlip {
    /// Target side: `true` shows the back face once settled.
    pub flipped: bool,
    /// Linear animation progress in `[0, 1]`.
    pub progress: f32,
}

impl TileFlip {
    /// Reverses the target side; an in-flight animation turns around.
    pub fn toggle(&mut self) {
        self.flipped = !self.flipped;
    }

    fn target(&self) -> f32 {
        if self.flipped { 1.0 } else { 0.0 }
    }

    /// Whether the tile has not yet settled on its target side.
    pub fn is_animating(&self) -> bool {
        self.progress != self.target()
    }

    /// Moves `progress` toward the target by `dt / duration`.
    pub fn advance(&mut self, dt: f32, duration: f32) {
        let step = if duration > 0.0 { dt / duration } else { 1.0 };
        let target = self.target();
        self.progress = if self.progress < target {
            (self.progress + step).min(target)
        } else {
            (self.progress - step).max(target)
        };
    }

    /// Rotation about the screen's vertical axis, `0..=PI`.
    pub fn angle(&self) -> f32 {
        PI * math::ease_out_cubic(self.progress.clamp(0.0, 1.0))
    }

    /// `true` once the tile has turned past edge-on.
    pub fn shows_back(&self) -> bool {
        self.angle() > FRAC_PI_2
    }
}

/// Tiles currently spawned, keyed by index, and the range they were built for.
#[derive(Resource, Default)]
pub struct VisibleTiles {
    /// Index → tile entity.
    pub map: HashMap<HexIndex, Entity>,
    /// Range the map was last synced to.
    pub range: VisibleRange,
}

/// Shared unit-radius hexagon mesh; tiles scale it by the geometry radius.
#[derive(Resource)]
pub struct TileMesh(pub Handle<Mesh>);

/// Identifies one cached tile material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialKey {
    /// Palette entry.
    pub color: HexColor,
    /// Back face (translucent) rather than front.
    pub back: bool,
    /// Quantized dim step, `0` = undimmed.
    pub level: u8,
}

impl MaterialKey {
    /// Key for a tile with falloff `weight` (clamped to `[0, 1]`), quantized
    /// to `levels` steps.
    pub fn new(color: HexColor, back: bool, weight: f64, levels: u8) -> Self {
        let top = f64::from(levels.max(2) - 1);
        let level = (weight.clamp(0.0, 1.0) * top).round() as u8;
        Self { color, back, level }
    }

    /// Render color for this key under `cfg`.
    pub fn render_color(&self, cfg: &TileConfig) -> Color {
        let top = f32::from(cfg.dimming.levels.max(2) - 1);
        let weight = f32::from(self.level) / top;
        let base = self.color.color().to_srgba();
        let alpha = if self.back { cfg.flip.back_alpha } else { 1.0 };
        let base = Color::srgba(base.red, base.green, base.blue, alpha);
        math::dim_color(base, weight * cfg.dimming.brightness)
    }
}

/// Lazily-filled cache of tile materials, one per [`MaterialKey`].
#[derive(Resource, Default)]
pub struct TileMaterials {
    cache: HashMap<MaterialKey, Handle<StandardMaterial>>,
}

impl TileMaterials {
    /// Returns the material for `key`, creating it on first use.
    pub fn get_or_create(
        &mut self,
        key: MaterialKey,
        cfg: &TileConfig,
        materials: &mut Assets<StandardMaterial>,
    ) -> Handle<StandardMaterial> {
        self.cache
            .entry(key)
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: key.render_color(cfg),
                    unlit: true,
                    alpha_mode: AlphaMode::Blend,
                    double_sided: true,
                    cull_mode: None,
                    ..default()
                })
            })
            .clone()
    }

    /// Number of materials created so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// `true` before the first tile is drawn.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
