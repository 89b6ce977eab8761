//! Scroll surface: emulates an unbounded plane with a large finite one.
//!
//! Owns the [`ScrollViewport`] (offset + size in world pixels), pans it from
//! mouse drag, wheel, and arrow keys, and keeps the orthographic camera framed
//! on viewport-local space. Short presses are reported as [`PointerTap`]s for
//! [`crate::tiles`] to consume.

mod entities;
mod systems;

pub use entities::{PointerTap, ScrollViewport, ViewportCamera};

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::GameState;

/// Per-plugin configuration for the scroll surface.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct ScrollConfig {
    /// Edge length of the square backing surface; the offset never leaves it.
    pub content_edge: f64,
    /// Offset the session starts at.
    pub start_offset: DVec2,
    /// Pixels scrolled per wheel line.
    pub wheel_line_pixels: f64,
    /// Arrow-key pan speed in pixels per second.
    pub key_pan_speed: f64,
    /// Max cursor travel (pixels) for a press to still count as a tap.
    pub tap_slop: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        let content_edge = 1_000_000_000.0;
        Self {
            content_edge,
            start_offset: DVec2::splat(content_edge / 2.0),
            wheel_line_pixels: 40.0,
            key_pan_speed: 600.0,
            tap_slop: 6.0,
        }
    }
}

/// Ordering of scroll-surface systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScrollSet {
    /// Viewport size/offset are final for this frame after this set.
    Viewport,
}

/// Scroll surface plugin: viewport tracking, panning, and tap detection.
pub struct ScrollPlugin(pub ScrollConfig);

impl Plugin for ScrollPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ScrollConfig>()
            .insert_resource(self.0.clone())
            .insert_resource(ScrollViewport::at(self.0.start_offset))
            .init_resource::<entities::DragState>()
            .add_message::<PointerTap>()
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(
                Update,
                (
                    systems::sync_viewport_size,
                    (systems::drag_pan, systems::wheel_pan, systems::key_pan)
                        .run_if(in_state(GameState::Running)),
                    systems::clamp_offset,
                    systems::frame_camera,
                )
                    .chain()
                    .in_set(ScrollSet::Viewport),
            );
    }
}
