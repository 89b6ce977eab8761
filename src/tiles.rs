//! Tile materialization: one entity per visible hex index.
//!
//! Each frame the engine's visible range is diffed against the tiles already
//! spawned; tiles that left the range are despawned, new ones spawned. Every
//! live tile is then placed, scaled, and tinted from its engine layout.
//! Tapped tiles flip.

mod entities;
mod systems;

pub use entities::{HexTile, MaterialKey, TileFlip, TileMaterials, TileMesh, VisibleTiles};

use bevy::prelude::*;

use crate::GameState;
use crate::hex::{GridEngine, HexGeometry};
use crate::math;
use crate::scroll::ScrollSet;

/// Nested configuration for the tile subsystem.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct TileConfig {
    /// Hexagon size and spacing shared with the engine.
    pub geometry: HexGeometry,
    /// Tap-to-flip animation.
    pub flip: FlipSettings,
    /// De-emphasis of tiles away from the viewport center.
    pub dimming: DimSettings,
    /// Background clear color.
    pub clear_color: Color,
}

/// Flip animation parameters.
#[derive(Clone, Debug, Reflect)]
pub struct FlipSettings {
    /// Seconds for a half turn.
    pub duration: f32,
    /// Opacity of the back face.
    pub back_alpha: f32,
}

/// How strongly the falloff weight shrinks and darkens a tile.
#[derive(Clone, Debug, Reflect)]
pub struct DimSettings {
    /// Scale lost at weight 1 (`scale = 1 - weight * scale`).
    pub scale: f32,
    /// Brightness lost at weight 1.
    pub brightness: f32,
    /// Number of distinct dim steps materials are quantized to.
    pub levels: u8,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            geometry: HexGeometry::default(),
            flip: FlipSettings {
                duration: 0.6,
                back_alpha: 0.5,
            },
            dimming: DimSettings {
                scale: 0.4,
                brightness: 0.9,
                levels: 32,
            },
            clear_color: Color::BLACK,
        }
    }
}

impl TileConfig {
    /// Engine bound to this config's geometry.
    pub fn engine(&self) -> GridEngine {
        GridEngine::new(self.geometry)
    }

    /// Circumradius a tile is drawn at for falloff `weight`.
    pub fn drawn_radius(&self, weight: f64) -> f64 {
        self.geometry.radius * f64::from(math::dimmed_scale(weight as f32, self.dimming.scale))
    }
}

/// Tile plugin: range diffing, per-frame layout, and tap-to-flip.
pub struct TilesPlugin(pub TileConfig);

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<TileConfig>()
            .register_type::<HexTile>()
            .register_type::<TileFlip>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .init_resource::<VisibleTiles>()
            .init_resource::<TileMaterials>()
            .add_systems(Startup, systems::build_tile_mesh)
            .add_systems(
                Update,
                (
                    systems::sync_visible_tiles,
                    systems::handle_taps.run_if(in_state(GameState::Running)),
                    systems::animate_flips,
                    systems::layout_tiles,
                )
                    .chain()
                    .after(ScrollSet::Viewport),
            );
    }
}
