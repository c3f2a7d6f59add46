use std::f32::consts::FRAC_PI_2;

use macroquad::prelude::*;

use crate::core::{palette, GameResolution};
use crate::sim::{SATISFACTION_MAX, SATISFACTION_MIN};

const DIAL_RADIUS: f32 = 110.0;

/// Needle angle in radians for a satisfaction reading: the dial sweeps
/// [0.6, 1.2] across -90°..+90°, straight up at 0.9. Readings outside the
/// range pin the needle at the stops.
pub fn needle_angle(satisfaction: f32) -> f32 {
    let s = satisfaction.clamp(SATISFACTION_MIN, SATISFACTION_MAX);
    let t = (s - SATISFACTION_MIN) / (SATISFACTION_MAX - SATISFACTION_MIN);
    -FRAC_PI_2 + t * (FRAC_PI_2 * 2.0)
}

/// Draw the satisfaction dial: a half-disc face with a needle pivoting on
/// its base. `pos` is the pivot in native coordinates.
pub fn draw(res: &GameResolution, pos: Vec2, satisfaction: f32) {
    let pivot = res.to_screen(pos);
    let radius = DIAL_RADIUS * res.factor.y;

    draw_circle(pivot.x, pivot.y, radius, palette::DIALOG_FRAME.to_mq());
    draw_circle_lines(pivot.x, pivot.y, radius, 3.0, palette::DIALOG_BORDER.to_mq());
    // mask the lower half so only the sweep arc shows
    draw_rectangle(
        pivot.x - radius - 2.0,
        pivot.y,
        radius * 2.0 + 4.0,
        radius + 4.0,
        palette::SKY.to_mq(),
    );

    let angle = needle_angle(satisfaction);
    let tip = pivot + vec2(angle.sin(), -angle.cos()) * radius * 0.85;
    draw_line(pivot.x, pivot.y, tip.x, tip.y, 4.0 * res.factor.y.max(1.0), palette::BLACK.to_mq());
    draw_circle(pivot.x, pivot.y, 6.0 * res.factor.y, palette::DIALOG_BORDER.to_mq());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_points_straight_up() {
        assert!(needle_angle(0.9).abs() < 1e-6);
    }

    #[test]
    fn endpoints_hit_the_stops() {
        assert!((needle_angle(0.6) + FRAC_PI_2).abs() < 1e-6);
        assert!((needle_angle(1.2) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_readings_are_pinned() {
        assert_eq!(needle_angle(0.0), needle_angle(0.6));
        assert_eq!(needle_angle(5.0), needle_angle(1.2));
    }
}
