use macroquad::prelude::*;

use crate::core::{palette, GameResolution, NATIVE_HEIGHT, NATIVE_WIDTH};
use crate::rendering::dial;
use crate::rendering::hud::Hud;
use crate::state::GameSession;
use crate::ui::{Label, TextStyle};

const GROUND_TOP: f32 = 950.0;

/// Redraw the whole scene: backdrop, mines, readouts, dial and the
/// standalone buttons. Everything is authored at native resolution and
/// scaled through the session's resolution context.
pub fn draw_full(session: &mut GameSession, hud: &Hud, dt: f32) {
    let res = session.res;

    clear_background(palette::SKY.to_mq());
    draw_ground(&res);
    draw_mines(&res, session.data.mines);
    draw_readouts(&res, session);
    dial::draw(&res, vec2(2340.0, 300.0), session.data.satisfaction);

    for button in &mut session.buttons {
        button.draw(&res, dt);
    }

    if session.show_fps {
        hud.draw();
    }
}

/// Translucent dimming layer composited over the scene while a dialog is
/// open. Only visible through later partial updates because the frame it is
/// first drawn on is a guaranteed full present.
pub fn draw_dim_overlay() {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        palette::DIM.to_mq(),
    );
}

fn draw_ground(res: &GameResolution) {
    let top_left = res.to_screen(vec2(0.0, GROUND_TOP));
    let size = res.to_screen(vec2(NATIVE_WIDTH, NATIVE_HEIGHT - GROUND_TOP));
    draw_rectangle(top_left.x, top_left.y, size.x, size.y, palette::GROUND.to_mq());
}

fn draw_mines(res: &GameResolution, mines: u32) {
    for i in 0..mines.min(8) {
        let x = 220.0 + i as f32 * 280.0;
        let shaft_tl = res.to_screen(vec2(x, GROUND_TOP - 60.0));
        let shaft_sz = vec2(120.0, 220.0) * res.factor;
        draw_rectangle(shaft_tl.x, shaft_tl.y, shaft_sz.x, shaft_sz.y, palette::SHAFT.to_mq());

        // headframe
        let apex = res.to_screen(vec2(x + 60.0, GROUND_TOP - 180.0));
        let base_l = res.to_screen(vec2(x, GROUND_TOP - 60.0));
        let base_r = res.to_screen(vec2(x + 120.0, GROUND_TOP - 60.0));
        draw_triangle(apex, base_l, base_r, palette::DIALOG_BORDER.to_mq());
    }
}

fn draw_readouts(res: &GameResolution, session: &GameSession) {
    let data = &session.data;
    let lines = [
        (
            Label::new(
                format!("YEAR {}", data.year),
                TextStyle::MediumBold,
                palette::BLACK,
            ),
            vec2(40.0, 30.0),
        ),
        (
            Label::new(
                format!("Money: {:.0}", data.money),
                TextStyle::Medium,
                palette::BLACK,
            ),
            vec2(40.0, 110.0),
        ),
        (
            Label::new(
                format!("Population: {}", data.population),
                TextStyle::Medium,
                palette::BLACK,
            ),
            vec2(40.0, 160.0),
        ),
        (
            Label::new(
                format!(
                    "Ore: {} @ {:.1} ({})",
                    data.ore_stored,
                    data.ore_price,
                    signed(data.ore_price_delta)
                ),
                TextStyle::Medium,
                palette::BLACK,
            ),
            vec2(40.0, 210.0),
        ),
        (
            Label::new(
                format!(
                    "Food: {} @ {:.1} ({})",
                    data.food_stored,
                    data.food_price,
                    signed(data.food_price_delta)
                ),
                TextStyle::Medium,
                palette::BLACK,
            ),
            vec2(40.0, 260.0),
        ),
    ];

    for (label, pos) in &lines {
        label.draw(res.to_screen(*pos), false, res.factor.y);
    }
}

pub fn signed(delta: f32) -> String {
    if delta >= 0.0 {
        format!("+{delta:.1}")
    } else {
        format!("{delta:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_formats_both_directions() {
        assert_eq!(signed(1.25), "+1.2");
        assert_eq!(signed(-0.5), "-0.5");
        assert_eq!(signed(0.0), "+0.0");
    }
}
