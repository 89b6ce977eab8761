use bevy::camera::ScalingMode;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ScrollConfig;
use super::entities::{DragState, PointerTap, ScrollViewport, ViewportCamera};
use crate::math;

/// Camera height above the tile plane; tiles live at `y = 0`.
const CAMERA_HEIGHT: f32 = 100.0;

/// Spawns the orthographic top-down camera.
///
/// Screen-right is world `+X` and screen-down is world `+Z`, so a
/// viewport-local point `(x, y)` renders at `Vec3::new(x, 0.0, y)`.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("ViewportCamera"),
        Camera3d::default(),
        Tonemapping::None,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: 1.0,
                height: 1.0,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, CAMERA_HEIGHT, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
        ViewportCamera,
    ));
}

/// Copies the primary window's logical size into [`ScrollViewport::size`].
pub fn sync_viewport_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ScrollViewport>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = DVec2::new(f64::from(window.width()), f64::from(window.height()));
    if viewport.size != size {
        debug!("viewport resized to {size}");
        viewport.size = size;
    }
}

/// Left-drag pans the content with the pointer; a short press becomes a [`PointerTap`].
pub fn drag_pan(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cfg: Res<ScrollConfig>,
    mut drag: ResMut<DragState>,
    mut viewport: ResMut<ScrollViewport>,
    mut taps: MessageWriter<PointerTap>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_pressed(MouseButton::Left)
        && let Some(pos) = cursor
    {
        drag.press(pos);
    }

    if buttons.pressed(MouseButton::Left)
        && let Some(pos) = cursor
    {
        let delta = drag.drag_to(pos);
        if delta != Vec2::ZERO {
            viewport.offset -= delta.as_dvec2();
        }
    }

    if buttons.just_released(MouseButton::Left)
        && drag.release(cfg.tap_slop)
        && let Some(pos) = cursor
    {
        taps.write(PointerTap { position: pos });
    }
}

/// Mouse wheel / trackpad scrolling.
pub fn wheel_pan(
    mut wheel: MessageReader<MouseWheel>,
    cfg: Res<ScrollConfig>,
    mut viewport: ResMut<ScrollViewport>,
) {
    for ev in wheel.read() {
        let pixels_per_unit = match ev.unit {
            MouseScrollUnit::Line => cfg.wheel_line_pixels,
            MouseScrollUnit::Pixel => 1.0,
        };
        viewport.offset -= DVec2::new(f64::from(ev.x), f64::from(ev.y)) * pixels_per_unit;
    }
}

/// Arrow keys pan at [`ScrollConfig::key_pan_speed`].
pub fn key_pan(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    cfg: Res<ScrollConfig>,
    mut viewport: ResMut<ScrollViewport>,
) {
    let mut direction = DVec2::ZERO;
    if keys.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        direction.y += 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        direction.y -= 1.0;
    }

    if direction != DVec2::ZERO {
        viewport.offset +=
            direction.normalize() * cfg.key_pan_speed * f64::from(time.delta_secs());
    }
}

/// Keeps the offset on the finite backing surface.
pub fn clamp_offset(cfg: Res<ScrollConfig>, mut viewport: ResMut<ScrollViewport>) {
    let clamped = math::clamp_scroll_offset(viewport.offset, viewport.size, cfg.content_edge);
    if clamped != viewport.offset {
        debug!("scroll offset clamped to {clamped}");
        viewport.offset = clamped;
    }
}

/// Centers the camera on viewport-local space with one unit per logical pixel.
pub fn frame_camera(
    viewport: Res<ScrollViewport>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<ViewportCamera>>,
) {
    if !viewport.is_changed() || !viewport.has_area() {
        return;
    }
    let Ok((mut transform, mut projection)) = cameras.single_mut() else {
        return;
    };

    let half = (viewport.size / 2.0).as_vec2();
    transform.translation = Vec3::new(half.x, CAMERA_HEIGHT, half.y);

    if let Projection::Orthographic(ortho) = &mut *projection {
        ortho.scaling_mode = ScalingMode::Fixed {
            width: viewport.size.x as f32,
            height: viewport.size.y as f32,
        };
    }
}
