use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use hexx::{HexLayout, PlaneMeshBuilder};

use super::TileConfig;
use super::entities::{HexTile, MaterialKey, TileFlip, TileMaterials, TileMesh, VisibleTiles};
use crate::hex::{TileLayout, VisibleRange, color_for};
use crate::scroll::{PointerTap, ScrollViewport};

// ── Startup ────────────────────────────────────────────────────────

/// Builds the shared unit-radius hexagon mesh and logs the active geometry.
pub fn build_tile_mesh(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    cfg: Res<TileConfig>,
) {
    let unit_layout = HexLayout {
        scale: Vec2::splat(1.0),
        ..default()
    };
    let hex_mesh_info = PlaneMeshBuilder::new(&unit_layout).build();
    let hex_mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, hex_mesh_info.vertices)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, hex_mesh_info.normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, hex_mesh_info.uvs)
    .with_inserted_indices(Indices::U16(hex_mesh_info.indices));
    commands.insert_resource(TileMesh(meshes.add(hex_mesh)));

    let g = &cfg.geometry;
    info!(
        "hex geometry: radius={} spacing={} pitch={:.2}x{:.2}",
        g.radius,
        g.spacing,
        g.horizontal_spacing(),
        g.vertical_spacing()
    );
}

// ── Update: range diffing ──────────────────────────────────────────

/// Despawns tiles that left the visible range and spawns the ones that entered it.
///
/// Skipped while the range is unchanged, which is most frames of a slow scroll.
pub fn sync_visible_tiles(
    mut commands: Commands,
    cfg: Res<TileConfig>,
    viewport: Res<ScrollViewport>,
    mesh: Option<Res<TileMesh>>,
    mut cache: ResMut<TileMaterials>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut tiles: ResMut<VisibleTiles>,
) {
    let Some(mesh) = mesh else { return };

    let engine = cfg.engine();
    let range = if viewport.has_area() {
        engine.visible_indices(viewport.offset, viewport.size)
    } else {
        VisibleRange::EMPTY
    };
    if range == tiles.range {
        return;
    }

    let before = tiles.map.len();
    tiles.map.retain(|index, entity| {
        let keep = range.contains(*index);
        if !keep {
            commands.entity(*entity).despawn();
        }
        keep
    });
    let despawned = before - tiles.map.len();

    let mut spawned = 0usize;
    for index in range.iter() {
        if tiles.map.contains_key(&index) {
            continue;
        }
        let layout = engine.tile_layout(index, viewport.offset, viewport.size);
        let flip = TileFlip::default();
        let key = MaterialKey::new(color_for(index), false, layout.weight, cfg.dimming.levels);
        let entity = commands
            .spawn((
                Name::new(format!("Hex ({}, {})", index.row, index.column)),
                HexTile { index },
                flip,
                Mesh3d(mesh.0.clone()),
                MeshMaterial3d(cache.get_or_create(key, &cfg, &mut materials)),
                tile_transform(&layout, &flip, &cfg),
            ))
            .id();
        tiles.map.insert(index, entity);
        spawned += 1;
    }

    debug!(
        "visible rows {:?} columns {:?}: +{spawned} -{despawned} ({} live)",
        range.rows,
        range.columns,
        tiles.map.len()
    );
    tiles.range = range;
}

// ── Update: taps and flips ─────────────────────────────────────────

/// Resolves each [`PointerTap`] to the tile drawn under it and toggles its flip.
///
/// The hit area shrinks with the tile, so a tap beside a dimmed edge tile
/// misses it.
pub fn handle_taps(
    mut taps: MessageReader<PointerTap>,
    cfg: Res<TileConfig>,
    viewport: Res<ScrollViewport>,
    tiles: Res<VisibleTiles>,
    mut flips: Query<&mut TileFlip>,
) {
    let engine = cfg.engine();
    for tap in taps.read() {
        let world = viewport.to_world(tap.position);
        let Some(index) = cfg.geometry.nearest_index(world) else {
            continue;
        };
        let layout = engine.tile_layout(index, viewport.offset, viewport.size);
        if cfg.geometry.world_position(index).distance(world) > cfg.drawn_radius(layout.weight) {
            continue;
        }
        if let Some(&entity) = tiles.map.get(&index)
            && let Ok(mut flip) = flips.get_mut(entity)
        {
            flip.toggle();
            info!(
                "Tapped hexagon at row: {}, column: {}",
                index.row, index.column
            );
            if let Some(center) = cfg.geometry.nearest_index(viewport.center()) {
                debug!("tap was {} steps from the center tile", index.distance_to(center));
            }
        }
    }
}

/// Advances every in-flight flip.
pub fn animate_flips(time: Res<Time>, cfg: Res<TileConfig>, mut flips: Query<&mut TileFlip>) {
    for mut flip in &mut flips {
        if flip.is_animating() {
            flip.advance(time.delta_secs(), cfg.flip.duration);
        }
    }
}

// ── Update: layout ─────────────────────────────────────────────────

/// Places, scales, rotates, and tints every live tile for this frame's viewport.
pub fn layout_tiles(
    cfg: Res<TileConfig>,
    viewport: Res<ScrollViewport>,
    mut cache: ResMut<TileMaterials>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut tiles: Query<(
        &HexTile,
        &TileFlip,
        &mut Transform,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let engine = cfg.engine();
    for (tile, flip, mut transform, mut material) in &mut tiles {
        let layout = engine.tile_layout(tile.index, viewport.offset, viewport.size);
        *transform = tile_transform(&layout, flip, &cfg);

        let key = MaterialKey::new(
            layout.color,
            flip.shows_back(),
            layout.weight,
            cfg.dimming.levels,
        );
        let handle = cache.get_or_create(key, &cfg, &mut materials);
        if material.0 != handle {
            material.0 = handle;
        }
    }
}

/// Viewport-local render transform for one tile.
///
/// The hex plane lies in XZ; `(x, y)` on screen is `(x, 0, y)` in the scene.
fn tile_transform(layout: &TileLayout, flip: &TileFlip, cfg: &TileConfig) -> Transform {
    let scale = cfg.drawn_radius(layout.weight) as f32;
    Transform::from_xyz(layout.position.x as f32, 0.0, layout.position.y as f32)
        .with_rotation(Quat::from_rotation_z(flip.angle()))
        .with_scale(Vec3::new(scale, 1.0, scale))
}
