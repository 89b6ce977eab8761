//! Property-based invariant tests for the hex-grid engine.
//!
//! These tests verify structural invariants that must hold for any valid
//! geometry and viewport:
//!
//! 1. Coverage: every tile overlapping the viewport is in the visible range.
//! 2. Consistency: every tile in the visible range lies near the viewport.
//! 3. Adjacent columns are exactly one horizontal pitch apart.
//! 4. Odd rows are shifted by half a pitch, even rows are not.
//! 5. Colors are deterministic and drawn from the palette.
//! 6. Falloff is zero at the center and grows outward.
//! 7. Tile weights stay in `[0, 1]`.
//! 8. Hit-testing a tile center returns that tile.
//! 9. Every neighbor is at distance one, including on the `i32` bounds.
//! 10. No panics on extreme or non-finite input.

use bevy::math::DVec2;
use infinite_hexagons::hex::{
    GridEngine, HexColor, HexGeometry, HexIndex, PALETTE, TileLayout, Viewport, VisibleRange,
    color_for, visible_range,
};
use infinite_hexagons::math::falloff_weight;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const EPS: f64 = 1e-6;

fn geometry_strategy() -> impl Strategy<Value = HexGeometry> {
    (10.0f64..80.0, 0.0f64..20.0).prop_map(|(r, s)| HexGeometry::new(r, s))
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (
        -1.0e6f64..1.0e6,
        -1.0e6f64..1.0e6,
        0.0f64..800.0,
        0.0f64..800.0,
    )
        .prop_map(|(x, y, w, h)| Viewport::new(DVec2::new(x, y), DVec2::new(w, h)))
}

fn index_strategy() -> impl Strategy<Value = HexIndex> {
    (any::<i32>(), any::<i32>()).prop_map(|(r, c)| HexIndex::new(r, c))
}

fn moderate_index_strategy() -> impl Strategy<Value = HexIndex> {
    (-100_000i32..100_000, -100_000i32..100_000).prop_map(|(r, c)| HexIndex::new(r, c))
}

/// Indices in a band two cells wider than the visible range on every side.
fn surrounding(range: &VisibleRange) -> impl Iterator<Item = HexIndex> + '_ {
    (range.rows.start - 2..range.rows.end + 2).flat_map(move |row| {
        (range.columns.start - 2..range.columns.end + 2)
            .map(move |column| HexIndex::new(row, column))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Coverage
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn overlapping_tiles_are_covered(g in geometry_strategy(), v in viewport_strategy()) {
        let range = visible_range(&g, &v);
        let rect = v.world_rect();
        let half_width = g.width() / 2.0;
        for index in surrounding(&range) {
            let c = g.world_position(index);
            let overlaps = c.x + half_width > rect.min.x + EPS
                && c.x - half_width < rect.max.x - EPS
                && c.y + g.radius > rect.min.y + EPS
                && c.y - g.radius < rect.max.y - EPS;
            if overlaps {
                prop_assert!(
                    range.contains(index),
                    "{:?} overlaps viewport {:?} but is outside {:?}",
                    index, v, range
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Consistency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn covered_tiles_are_near_viewport(g in geometry_strategy(), v in viewport_strategy()) {
        let range = visible_range(&g, &v);
        let rect = v.world_rect().expand(g.radius);
        let (h, vs) = (g.horizontal_spacing(), g.vertical_spacing());
        for index in range.iter() {
            let c = g.world_position(index);
            prop_assert!(c.x >= rect.min.x - h - EPS && c.x <= rect.max.x + h + EPS,
                "{:?} x={} outside {:?}", index, c.x, rect);
            prop_assert!(c.y >= rect.min.y - vs - EPS && c.y <= rect.max.y + vs + EPS,
                "{:?} y={} outside {:?}", index, c.y, rect);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Column pitch
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjacent_columns_one_pitch_apart(g in geometry_strategy(), i in moderate_index_strategy()) {
        let a = g.world_position(i);
        let b = g.world_position(HexIndex::new(i.row, i.column + 1));
        prop_assert!((b.x - a.x - g.horizontal_spacing()).abs() < 1e-6);
        prop_assert_eq!(a.y, b.y);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Row parity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn odd_rows_shift_half_pitch(g in geometry_strategy(), i in moderate_index_strategy()) {
        let expected = if i.row.rem_euclid(2) == 1 { g.horizontal_spacing() / 2.0 } else { 0.0 };
        prop_assert_eq!(g.row_shift(i.row), expected);
        let next = g.world_position(HexIndex::new(i.row + 1, i.column));
        let here = g.world_position(i);
        prop_assert!((next.y - here.y - g.vertical_spacing()).abs() < 1e-6);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Color determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn color_is_deterministic_palette_entry(i in index_strategy()) {
        let color = color_for(i);
        prop_assert_eq!(color, color_for(HexIndex::new(i.row, i.column)));
        prop_assert!(PALETTE.contains(&color));
        prop_assert_ne!(color, HexColor::FALLBACK);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Falloff shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn falloff_grows_away_from_center(
        w in 1.0f64..2000.0,
        h in 1.0f64..2000.0,
        dir in (-1.0f64..1.0, -1.0f64..1.0),
        t1 in 0.0f64..1.0,
        t2 in 0.0f64..1.0,
    ) {
        let size = DVec2::new(w, h);
        let center = size / 2.0;
        prop_assert_eq!(falloff_weight(center, center, size), 0.0);

        let d = DVec2::new(dir.0, dir.1) * size;
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let wn = falloff_weight(center + d * near, center, size);
        let wf = falloff_weight(center + d * far, center, size);
        prop_assert!(wn <= wf + 1e-12, "near {} > far {}", wn, wf);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Weight bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tile_weight_is_unit_interval(g in geometry_strategy(), v in viewport_strategy()) {
        let engine = GridEngine::new(g);
        let range = engine.visible_indices(v.offset, v.size);
        for index in range.iter() {
            let layout = engine.tile_layout(index, v.offset, v.size);
            prop_assert!((0.0..=1.0).contains(&layout.weight), "{:?}", layout);
            prop_assert_eq!(layout.color, color_for(index));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Hit-testing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tile_center_hits_itself(g in geometry_strategy(), i in moderate_index_strategy()) {
        prop_assert_eq!(g.index_at(g.world_position(i)), Some(i));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Neighbors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn neighbors_at_distance_one(i in index_strategy()) {
        for n in i.neighbors() {
            prop_assert_eq!(i.distance_to(n), 1, "{:?} -> {:?}", i, n);
            prop_assert!(n.neighbors().any(|back| back == i));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Extreme input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extreme_input_never_panics(
        x in proptest::num::f64::ANY,
        y in proptest::num::f64::ANY,
        w in proptest::num::f64::ANY,
        h in proptest::num::f64::ANY,
        i in index_strategy(),
    ) {
        let engine = GridEngine::default();
        let offset = DVec2::new(x, y);
        let size = DVec2::new(w, h);
        let range = engine.visible_indices(offset, size);
        let _ = range.len();
        let layout = engine.tile_layout(i, offset, size);

        if Viewport::new(offset, size).is_valid() {
            prop_assert!(range.rows.start <= range.rows.end);
            prop_assert!(range.columns.start <= range.columns.end);
        } else {
            prop_assert_eq!(range, VisibleRange::EMPTY);
            prop_assert_eq!(layout, TileLayout::INERT);
        }
    }
}
