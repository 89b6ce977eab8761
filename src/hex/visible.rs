use std::ops::Range;

use bevy::math::DVec2;

use super::{HexGeometry, HexIndex};

/// Window into world space: top-left `offset` plus `size`, both in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// World coordinate of the top-left corner.
    pub offset: DVec2,
    /// Width and height.
    pub size: DVec2,
}

impl Viewport {
    /// Creates a viewport from its top-left world offset and size.
    pub const fn new(offset: DVec2, size: DVec2) -> Self {
        Self { offset, size }
    }

    /// World coordinate of the viewport's center.
    pub fn center(&self) -> DVec2 {
        self.offset + self.size / 2.0
    }

    /// `false` for NaN/infinite components or a negative size.
    pub fn is_valid(&self) -> bool {
        self.offset.is_finite() && self.size.is_finite() && self.size.cmpge(DVec2::ZERO).all()
    }

    /// World rectangle covered by the viewport.
    pub fn world_rect(&self) -> WorldRect {
        WorldRect {
            min: self.offset,
            max: self.offset + self.size,
        }
    }
}

/// Axis-aligned rectangle in world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldRect {
    /// Top-left corner.
    pub min: DVec2,
    /// Bottom-right corner.
    pub max: DVec2,
}

impl WorldRect {
    /// Grows the rectangle by `margin` on every side.
    pub fn expand(self, margin: f64) -> Self {
        Self {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Half-open rectangle of tile indices to materialize.
///
/// Never inverted: both ranges satisfy `start <= end`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleRange {
    /// Rows, top to bottom.
    pub rows: Range<i32>,
    /// Columns, left to right.
    pub columns: Range<i32>,
}

impl VisibleRange {
    /// A range with no tiles.
    pub const EMPTY: Self = Self {
        rows: 0..0,
        columns: 0..0,
    };

    /// Builds a range, swapping any inverted bounds.
    pub fn new(rows: Range<i32>, columns: Range<i32>) -> Self {
        Self {
            rows: rows.start.min(rows.end)..rows.start.max(rows.end),
            columns: columns.start.min(columns.end)..columns.start.max(columns.end),
        }
    }

    /// `true` when either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Number of tiles covered, saturating for ranges spanning most of `i32`.
    pub fn len(&self) -> usize {
        self.rows.len().saturating_mul(self.columns.len())
    }

    /// Whether `index` lies inside both ranges.
    pub fn contains(&self, index: HexIndex) -> bool {
        self.rows.contains(&index.row) && self.columns.contains(&index.column)
    }

    /// All covered indices in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = HexIndex> + '_ {
        self.rows
            .clone()
            .flat_map(move |row| self.columns.clone().map(move |column| HexIndex::new(row, column)))
    }
}

/// Smallest index range covering every tile that can touch `viewport`.
///
/// The viewport is grown by one radius before inverting the placement
/// formula, so tiles entering from an edge are materialized before they show.
/// Constant time in the offset magnitude.
///
/// ```
/// # use bevy::math::DVec2;
/// # use infinite_hexagons::hex::{HexGeometry, HexIndex, Viewport, visible_range};
/// let g = HexGeometry::new(30.0, 6.0);
/// let range = visible_range(&g, &Viewport::new(DVec2::ZERO, DVec2::splat(400.0)));
/// assert_eq!(range.rows, -2..8);
/// assert_eq!(range.columns, -2..7);
/// assert!(range.contains(HexIndex::ORIGIN));
/// ```
pub fn visible_range(geometry: &HexGeometry, viewport: &Viewport) -> VisibleRange {
    if !viewport.is_valid() || !geometry.is_valid() {
        return VisibleRange::EMPTY;
    }
    let rect = viewport.world_rect().expand(geometry.radius);

    let start_column = geometry.column_at(rect.min.x);
    let start_row = geometry.row_at(rect.min.y);
    let end_column = geometry.column_at(rect.max.x).saturating_add(1);
    let end_row = geometry.row_at(rect.max.y).saturating_add(1);

    VisibleRange::new(start_row..end_row, start_column..end_column)
}
