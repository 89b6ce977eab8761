use bevy::color::Color;
use bevy::reflect::Reflect;

use super::HexIndex;

/// Size of one hexagon and the gap between neighbours, in world pixels.
///
/// Passed explicitly into every engine call; nothing in the crate reads a
/// global copy.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct HexGeometry {
    /// Center-to-vertex distance.
    pub radius: f64,
    /// Gap between the edges of adjacent hexagons.
    pub spacing: f64,
}

impl Default for HexGeometry {
    fn default() -> Self {
        Self {
            radius: 30.0,
            spacing: 6.0,
        }
    }
}

impl HexGeometry {
    /// Creates a geometry with the given circumradius and edge gap.
    pub const fn new(radius: f64, spacing: f64) -> Self {
        Self { radius, spacing }
    }

    /// Horizontal footprint of one hexagon: `radius * sqrt(3)`.
    ///
    /// ```
    /// # use infinite_hexagons::hex::HexGeometry;
    /// let g = HexGeometry::new(30.0, 6.0);
    /// assert!((g.width() - 51.961).abs() < 1e-3);
    /// ```
    pub fn width(&self) -> f64 {
        self.radius * 3f64.sqrt()
    }

    /// Center-to-center distance between horizontally adjacent tiles.
    pub fn horizontal_spacing(&self) -> f64 {
        self.width() + self.spacing
    }

    /// Center-to-center distance between consecutive rows.
    pub fn vertical_spacing(&self) -> f64 {
        self.radius * 1.5 + self.spacing
    }

    /// X of the tile at column 0 on an even row, so that it is not clipped at x = 0.
    pub fn start_x(&self) -> f64 {
        self.width() / 2.0 + self.spacing / 2.0
    }

    /// Y of the tile at row 0, so that it is not clipped at y = 0.
    pub fn start_y(&self) -> f64 {
        self.radius + self.spacing / 2.0
    }

    /// `true` when the radius is finite and positive and the spacing finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.radius.is_finite()
            && self.radius > 0.0
            && self.spacing.is_finite()
            && self.spacing >= 0.0
    }
}

/// Named tile colors. The first twelve form the palette; [`HexColor::Gray`]
/// is reserved for inert layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
#[allow(missing_docs)]
pub enum HexColor {
    Red,
    Orange,
    Yellow,
    Green,
    Mint,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Pink,
    Brown,
    /// Fallback for degenerate input; never produced by [`color_for`].
    Gray,
}

/// Palette that [`color_for`] selects from.
pub const PALETTE: [HexColor; 12] = [
    HexColor::Red,
    HexColor::Orange,
    HexColor::Yellow,
    HexColor::Green,
    HexColor::Mint,
    HexColor::Teal,
    HexColor::Cyan,
    HexColor::Blue,
    HexColor::Indigo,
    HexColor::Purple,
    HexColor::Pink,
    HexColor::Brown,
];

impl HexColor {
    /// Color used for inert tile layouts.
    pub const FALLBACK: Self = Self::Gray;

    /// sRGB render color.
    pub fn color(self) -> Color {
        match self {
            Self::Red => Color::srgb(1.0, 0.231, 0.188),
            Self::Orange => Color::srgb(1.0, 0.584, 0.0),
            Self::Yellow => Color::srgb(1.0, 0.8, 0.0),
            Self::Green => Color::srgb(0.204, 0.78, 0.349),
            Self::Mint => Color::srgb(0.0, 0.78, 0.745),
            Self::Teal => Color::srgb(0.188, 0.69, 0.78),
            Self::Cyan => Color::srgb(0.196, 0.678, 0.902),
            Self::Blue => Color::srgb(0.0, 0.478, 1.0),
            Self::Indigo => Color::srgb(0.345, 0.337, 0.839),
            Self::Purple => Color::srgb(0.686, 0.322, 0.871),
            Self::Pink => Color::srgb(1.0, 0.176, 0.333),
            Self::Brown => Color::srgb(0.635, 0.518, 0.369),
            Self::Gray => Color::srgb(0.557, 0.557, 0.576),
        }
    }
}

const HASH_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Stable 64-bit mix of `(row, column)`.
///
/// A splitmix64 finalizer over the two coordinates packed into one word, so
/// the result does not depend on the process, platform, or hasher seed.
pub fn index_hash(index: HexIndex) -> u64 {
    let packed = (u64::from(index.row as u32) << 32) | u64::from(index.column as u32);
    let mut z = packed.wrapping_add(HASH_SEED);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic palette color for a tile.
///
/// The hash is unsigned, so every index (negative ones included) reduces into
/// [`PALETTE`] without a sign special case.
///
/// ```
/// # use infinite_hexagons::hex::{HexIndex, color_for};
/// let a = color_for(HexIndex::new(-4, 17));
/// assert_eq!(a, color_for(HexIndex::new(-4, 17)));
/// ```
pub fn color_for(index: HexIndex) -> HexColor {
    PALETTE[(index_hash(index) % PALETTE.len() as u64) as usize]
}
