//! Scroll-position readout drawn with egui.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::scroll::ScrollViewport;

/// Draws the current scroll offset in the top-left corner.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_scroll_label);
    }
}

/// Text shown by the HUD for an offset, truncated to whole pixels.
pub fn scroll_label(viewport: &ScrollViewport) -> String {
    format!(
        "Scroll Position\nX: {}, Y: {}",
        viewport.offset.x as i64, viewport.offset.y as i64
    )
}

fn draw_scroll_label(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    viewport: Res<ScrollViewport>,
    mut ready: Local<bool>,
) {
    // Egui fonts aren't available until after the first Context::run() in the render pass.
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());
    painter.text(
        egui::pos2(12.0, 12.0),
        egui::Align2::LEFT_TOP,
        scroll_label(&viewport),
        egui::FontId::proportional(16.0),
        egui::Color32::WHITE,
    );
}
