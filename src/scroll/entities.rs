use bevy::math::DVec2;
use bevy::prelude::*;

/// Current window into world space.
///
/// `offset` is the world coordinate of the top-left corner and grows without
/// bound as the user scrolls; `size` follows the primary window.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollViewport {
    /// World coordinate of the top-left corner.
    pub offset: DVec2,
    /// Logical window size in pixels; zero until the first window sync.
    pub size: DVec2,
}

impl ScrollViewport {
    /// A zero-size viewport at `offset`.
    pub fn at(offset: DVec2) -> Self {
        Self {
            offset,
            size: DVec2::ZERO,
        }
    }

    /// World coordinate of the viewport's center.
    pub fn center(&self) -> DVec2 {
        self.offset + self.size / 2.0
    }

    /// `true` once the window has reported a non-zero size.
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// World coordinate under a viewport-local point.
    pub fn to_world(&self, local: Vec2) -> DVec2 {
        self.offset + local.as_dvec2()
    }
}

/// Marker for the orthographic camera that frames viewport-local space.
#[derive(Component, Reflect)]
pub struct ViewportCamera;

/// Emitted when a left press is released without dragging.
#[derive(Message, Clone, Copy, Debug)]
pub struct PointerTap {
    /// Cursor position in viewport-local pixels.
    pub position: Vec2,
}

/// In-flight left-button press.
#[derive(Resource, Default)]
pub struct DragState {
    /// Cursor position on the previous frame while the button is held.
    pub(super) last: Option<Vec2>,
    /// Total cursor travel since the press.
    pub(super) travel: f32,
}

impl DragState {
    /// Starts tracking a press at `pos`.
    pub(super) fn press(&mut self, pos: Vec2) {
        self.last = Some(pos);
        self.travel = 0.0;
    }

    /// Records a cursor move and returns the delta since the last frame.
    pub(super) fn drag_to(&mut self, pos: Vec2) -> Vec2 {
        let delta = self.last.map_or(Vec2::ZERO, |last| pos - last);
        self.travel += delta.length();
        self.last = Some(pos);
        delta
    }

    /// Ends the press; `true` if it stayed within `slop` pixels.
    pub(super) fn release(&mut self, slop: f32) -> bool {
        let was_pressed = self.last.take().is_some();
        was_pressed && self.travel <= slop
    }
}
