use bevy::math::DVec2;
use bevy::reflect::Reflect;
use hexx::Hex;

use super::HexGeometry;

/// One cell of the infinite staggered-row tiling.
///
/// Odd rows sit half a horizontal pitch to the right of even rows. Parity is
/// Euclidean, so row `-1` is odd.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct HexIndex {
    /// Row, increasing downward.
    pub row: i32,
    /// Column, increasing to the right.
    pub column: i32,
}

/// `(row, column)` deltas to the six edge-sharing neighbours, indexed by row
/// parity (`[even, odd]`).
pub const NEIGHBOR_OFFSETS: [[(i32, i32); 6]; 2] = [
    [(0, 1), (-1, 0), (-1, -1), (0, -1), (1, -1), (1, 0)],
    [(0, 1), (-1, 1), (-1, 0), (0, -1), (1, 0), (1, 1)],
];

impl HexIndex {
    /// The tile whose center sits at `(start_x, start_y)`.
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Creates an index from a row and a column.
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Whether this tile belongs to a right-shifted row.
    pub fn is_odd_row(self) -> bool {
        self.row.rem_euclid(2) == 1
    }

    /// The edge-sharing neighbours, counter-clockwise from the right.
    ///
    /// Six everywhere except on the `i32` bounds, where cells past the edge of
    /// the index space are left out.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        let table = NEIGHBOR_OFFSETS[usize::from(self.is_odd_row())];
        table.into_iter().filter_map(move |(dr, dc)| {
            Some(Self::new(self.row.checked_add(dr)?, self.column.checked_add(dc)?))
        })
    }

    /// Axial coordinates of this tile (`x = q`, `y = r`).
    ///
    /// `q` wraps when `column - floor(row / 2)` leaves the `i32` range.
    pub fn to_axial(self) -> Hex {
        Hex::new(self.column.wrapping_sub(self.row.div_euclid(2)), self.row)
    }

    /// Inverse of [`Self::to_axial`].
    pub fn from_axial(hex: Hex) -> Self {
        Self::new(hex.y, hex.x.wrapping_add(hex.y.div_euclid(2)))
    }

    /// Number of steps between two tiles when walking across shared edges.
    ///
    /// Computed in `i64`, so it is exact for any pair of indices.
    pub fn distance_to(self, other: Self) -> u64 {
        let axial = |i: Self| {
            let r = i64::from(i.row);
            (i64::from(i.column) - r.div_euclid(2), r)
        };
        let (q0, r0) = axial(self);
        let (q1, r1) = axial(other);
        let (dq, dr) = (q1 - q0, r1 - r0);
        (dq.unsigned_abs() + dr.unsigned_abs() + (dq + dr).unsigned_abs()) / 2
    }
}

impl From<(i32, i32)> for HexIndex {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl HexGeometry {
    /// Extra x applied to odd rows.
    pub fn row_shift(&self, row: i32) -> f64 {
        if row.rem_euclid(2) == 0 {
            0.0
        } else {
            self.horizontal_spacing() / 2.0
        }
    }

    /// World-space center of a tile.
    pub fn world_position(&self, index: HexIndex) -> DVec2 {
        DVec2::new(
            self.start_x()
                + f64::from(index.column) * self.horizontal_spacing()
                + self.row_shift(index.row),
            self.start_y() + f64::from(index.row) * self.vertical_spacing(),
        )
    }

    /// Center of a tile relative to `origin_offset` (usually the viewport's top-left).
    ///
    /// ```
    /// # use bevy::math::DVec2;
    /// # use infinite_hexagons::hex::{HexGeometry, HexIndex};
    /// let g = HexGeometry::new(30.0, 6.0);
    /// let p = g.position(HexIndex::ORIGIN, DVec2::new(10.0, 0.0));
    /// assert!((p.x - (g.start_x() - 10.0)).abs() < 1e-9);
    /// assert_eq!(p.y, 33.0);
    /// ```
    pub fn position(&self, index: HexIndex, origin_offset: DVec2) -> DVec2 {
        self.world_position(index) - origin_offset
    }

    /// Column whose even-row center is the last at or left of `x`.
    ///
    /// Saturates at the `i32` bounds; NaN maps to 0.
    pub fn column_at(&self, x: f64) -> i32 {
        ((x - self.start_x()) / self.horizontal_spacing()).floor() as i32
    }

    /// Row whose center is the last at or above `y`.
    ///
    /// Saturates at the `i32` bounds; NaN maps to 0.
    pub fn row_at(&self, y: f64) -> i32 {
        ((y - self.start_y()) / self.vertical_spacing()).floor() as i32
    }

    /// Tile whose center is nearest to a world point.
    ///
    /// Rounds to the closest row and column, then settles between that guess
    /// and its neighbours. `None` for non-finite points or invalid geometry.
    pub fn nearest_index(&self, point: DVec2) -> Option<HexIndex> {
        if !point.is_finite() || !self.is_valid() {
            return None;
        }
        let row = ((point.y - self.start_y()) / self.vertical_spacing()).round() as i32;
        let column = ((point.x - self.start_x() - self.row_shift(row))
            / self.horizontal_spacing())
        .round() as i32;
        let guess = HexIndex::new(row, column);
        std::iter::once(guess)
            .chain(guess.neighbors())
            .map(|i| (i, self.world_position(i).distance_squared(point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Nearest tile to `point`, if `point` lies within `hit_radius` of its center.
    pub fn index_within(&self, point: DVec2, hit_radius: f64) -> Option<HexIndex> {
        let index = self.nearest_index(point)?;
        (self.world_position(index).distance(point) <= hit_radius).then_some(index)
    }

    /// Tile under a world point, using the full circumradius as hit area.
    ///
    /// Points in the spacing gap far enough from every center yield `None`.
    pub fn index_at(&self, point: DVec2) -> Option<HexIndex> {
        self.index_within(point, self.radius)
    }
}
