//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `DVec2` / `Color` inputs, making them straightforward to
//! unit-test.

use bevy::color::Color;
use bevy::math::DVec2;

/// Chebyshev distance between `position` and `center`, with each axis
/// normalized by the viewport's extent on that axis.
///
/// A zero-length axis contributes nothing, so a collapsed viewport never
/// produces NaN.
pub fn normalized_chebyshev(position: DVec2, center: DVec2, size: DVec2) -> f64 {
    let axis = |delta: f64, extent: f64| {
        if extent > 0.0 {
            delta.abs() / extent
        } else {
            0.0
        }
    };
    axis(position.x - center.x, size.x).max(axis(position.y - center.y, size.y))
}

/// Dimming weight of a tile: squared normalized Chebyshev distance from the
/// viewport center.
///
/// `0` at the center, `0.25` on the viewport edge midpoints, and slightly
/// above `1` for tiles deep in the off-screen margin. Not clamped.
///
/// # Examples
/// ```
/// # use bevy::math::DVec2;
/// # use infinite_hexagons::math::falloff_weight;
/// let size = DVec2::new(400.0, 200.0);
/// let center = DVec2::new(200.0, 100.0);
/// assert_eq!(falloff_weight(center, center, size), 0.0);
/// assert_eq!(falloff_weight(DVec2::new(400.0, 100.0), center, size), 0.25);
/// ```
pub fn falloff_weight(position: DVec2, center: DVec2, size: DVec2) -> f64 {
    let d = normalized_chebyshev(position, center, size);
    d * d
}

/// Cubic ease-out curve: fast start, gentle deceleration.
///
/// `t` should be in `[0, 1]`. Returns `1 - (1 - t)^3`.
///
/// Drives the tile flip animation.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Uniform scale multiplier for a dimmed tile: `1 - weight * dim_scale`.
///
/// `weight` is clamped to `[0, 1]` first.
pub fn dimmed_scale(weight: f32, dim_scale: f32) -> f32 {
    1.0 - weight.clamp(0.0, 1.0) * dim_scale
}

/// Darkens `color` by `amount` (`0` = unchanged, `1` = black), keeping alpha.
pub fn dim_color(color: Color, amount: f32) -> Color {
    let k = 1.0 - amount.clamp(0.0, 1.0);
    let c = color.to_srgba();
    Color::srgba(c.red * k, c.green * k, c.blue * k, c.alpha)
}

/// Keeps a scroll offset inside a square backing surface of edge
/// `content_edge`, leaving room for the viewport itself.
pub fn clamp_scroll_offset(offset: DVec2, size: DVec2, content_edge: f64) -> DVec2 {
    let max = (DVec2::splat(content_edge) - size).max(DVec2::ZERO);
    offset.clamp(DVec2::ZERO, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: DVec2 = DVec2::new(400.0, 300.0);
    const CENTER: DVec2 = DVec2::new(200.0, 150.0);

    // ── falloff_weight ──────────────────────────────────────────────

    #[test]
    fn falloff_is_zero_at_center() {
        assert_eq!(falloff_weight(CENTER, CENTER, SIZE), 0.0);
    }

    #[test]
    fn falloff_uses_the_larger_axis() {
        // dx = 0.1, dy = 0.2
        let p = CENTER + DVec2::new(40.0, 60.0);
        assert!((falloff_weight(p, CENTER, SIZE) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn falloff_is_symmetric_around_center() {
        let a = falloff_weight(CENTER + DVec2::new(73.0, -12.0), CENTER, SIZE);
        let b = falloff_weight(CENTER - DVec2::new(73.0, -12.0), CENTER, SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn falloff_reaches_one_a_full_viewport_away() {
        let p = CENTER + DVec2::new(SIZE.x, 0.0);
        assert!((falloff_weight(p, CENTER, SIZE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn falloff_can_exceed_one_in_the_margin() {
        let p = CENTER + DVec2::new(SIZE.x * 1.1, 0.0);
        assert!(falloff_weight(p, CENTER, SIZE) > 1.0);
    }

    #[test]
    fn falloff_is_monotonic_along_an_axis() {
        let weights: Vec<f64> = (0..=100)
            .map(|i| falloff_weight(CENTER + DVec2::new(i as f64 * 3.0, 0.0), CENTER, SIZE))
            .collect();
        for w in weights.windows(2) {
            assert!(w[1] >= w[0], "falloff must be non-decreasing");
        }
    }

    #[test]
    fn collapsed_axis_contributes_nothing() {
        let size = DVec2::new(0.0, 100.0);
        let w = falloff_weight(DVec2::new(500.0, 75.0), DVec2::new(0.0, 50.0), size);
        assert!((w - 0.0625).abs() < 1e-12);
        assert!(falloff_weight(DVec2::ONE, DVec2::ZERO, DVec2::ZERO).is_finite());
    }

    // ── ease_out_cubic ──────────────────────────────────────────────

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_at_half_is_above_half() {
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn ease_is_monotonically_increasing() {
        let steps: Vec<f32> = (0..=100)
            .map(|i| ease_out_cubic(i as f32 / 100.0))
            .collect();
        for w in steps.windows(2) {
            assert!(w[1] >= w[0], "ease_out_cubic must be non-decreasing");
        }
    }

    // ── dimming ─────────────────────────────────────────────────────

    #[test]
    fn dimmed_scale_clamps_weight() {
        assert_eq!(dimmed_scale(0.0, 0.4), 1.0);
        assert!((dimmed_scale(1.0, 0.4) - 0.6).abs() < 1e-6);
        assert!((dimmed_scale(3.0, 0.4) - 0.6).abs() < 1e-6);
        assert_eq!(dimmed_scale(-1.0, 0.4), 1.0);
    }

    #[test]
    fn dim_color_scales_channels_and_keeps_alpha() {
        let c = dim_color(Color::srgba(1.0, 0.5, 0.0, 0.5), 0.5).to_srgba();
        assert!((c.red - 0.5).abs() < 1e-6);
        assert!((c.green - 0.25).abs() < 1e-6);
        assert_eq!(c.blue, 0.0);
        assert!((c.alpha - 0.5).abs() < 1e-6);
    }

    #[test]
    fn full_dim_is_black() {
        let c = dim_color(Color::srgb(0.3, 0.6, 0.9), 1.0).to_srgba();
        assert_eq!((c.red, c.green, c.blue), (0.0, 0.0, 0.0));
    }

    // ── clamp_scroll_offset ─────────────────────────────────────────

    #[test]
    fn offset_inside_surface_passes_through() {
        let o = DVec2::new(5.0e8, 123.0);
        assert_eq!(clamp_scroll_offset(o, SIZE, 1.0e9), o);
    }

    #[test]
    fn offset_clamps_to_surface_edges() {
        let low = clamp_scroll_offset(DVec2::new(-10.0, -1.0), SIZE, 1.0e9);
        assert_eq!(low, DVec2::ZERO);
        let high = clamp_scroll_offset(DVec2::splat(2.0e9), SIZE, 1.0e9);
        assert_eq!(high, DVec2::splat(1.0e9) - SIZE);
    }

    #[test]
    fn viewport_larger_than_surface_pins_to_origin() {
        let o = clamp_scroll_offset(DVec2::new(50.0, 50.0), DVec2::splat(2000.0), 1000.0);
        assert_eq!(o, DVec2::ZERO);
    }
}
