#![warn(missing_docs)]
//! Infinite hexagon viewer.
//!
//! A scrollable, visually unbounded hexagonal grid. Only the tiles inside the
//! viewport (plus a one-radius margin) exist as entities; each is colored from
//! its coordinates, dimmed by its distance from the viewport center, and flips
//! when tapped.
//!
//! [`hex`] is the pure engine; [`scroll`], [`tiles`], and [`hud`] are the
//! Bevy plugins hosting it.

pub mod hex;
pub mod hud;
pub mod math;
pub mod scroll;
pub mod tiles;

use bevy::prelude::*;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Panning and tapping the grid.
    #[default]
    Running,
    /// World inspector open (Tab to toggle); grid input is paused.
    Debugging,
}
