use raylib::prelude::*;

use crate::constants::*;

/// Draws the loading indicator: an open ring spinning around `center`.
/// Shown whenever no image is available to display.
pub fn draw_loading_indicator(d: &mut RaylibDrawHandle, center: Vector2, angle: f32) {
    d.draw_ring(
        center,
        SPINNER_INNER_RADIUS,
        SPINNER_OUTER_RADIUS,
        angle,
        angle + SPINNER_ARC_DEGREES,
        SPINNER_SEGMENTS,
        Color::SKYBLUE,
    );
}
