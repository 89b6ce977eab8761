//! Virtualized infinite hex-grid engine.
//!
//! Everything under this module is free of ECS state: plain values in, plain
//! values out. The Bevy plugins in [`crate::scroll`] and [`crate::tiles`] call
//! into it once per frame.
//!
//! World space is measured in `f64` pixels so that scroll offsets in the
//! hundreds of millions keep sub-pixel precision. Only viewport-local
//! positions ever reach `f32` render transforms.

mod engine;
mod geometry;
mod layout;
mod visible;

pub use engine::{GridEngine, TileLayout};
pub use geometry::{HexColor, HexGeometry, PALETTE, color_for, index_hash};
pub use layout::{HexIndex, NEIGHBOR_OFFSETS};
pub use visible::{Viewport, VisibleRange, WorldRect, visible_range};
