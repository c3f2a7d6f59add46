//! The frame loop: poll input, update simulation/UI state, render, present,
//! once per frame. Single-threaded and frame-stepped; the measured frame
//! duration is the only clock any component sees.

use macroquad::prelude::*;

use crate::input::InputFrame;
use crate::rendering::{scene, Hud, Present};
use crate::state::GameSession;
use crate::ui::ButtonKind;

pub async fn run(mut session: GameSession) {
    let mut hud = Hud::new();

    loop {
        let dt = get_frame_time();
        session.begin_frame(dt);
        hud.update(dt);

        let input = InputFrame::poll();
        if input.quit {
            log::info!("quit requested");
            break;
        }

        route_input(&mut session, &input);
        render(&mut session, &hud, dt);

        next_frame().await;
    }
}

/// While a dialog is open it owns the pointer; otherwise the standalone
/// buttons are polled, stopping at the first one that consumes the click.
fn route_input(session: &mut GameSession, input: &InputFrame) {
    if let Some(ix) = session.active_index() {
        let fired = session.dialogs[ix].process(input);
        for f in fired {
            let outcome = session.apply(f.action);
            let button = &mut session.dialogs[ix].content.buttons[f.button];
            if button.kind == ButtonKind::Checkbox {
                button.set_checked(outcome);
            }
        }
    } else {
        let mouse = session.res.to_native(input.mouse);
        let mut fired = Vec::new();
        for (i, button) in session.buttons.iter_mut().enumerate() {
            let activation = button.check(mouse, input.primary_click());
            let consumed = activation.consumed;
            fired.extend(activation.fired.into_iter().map(|action| (i, action)));
            if consumed {
                break;
            }
        }
        for (i, action) in fired {
            let outcome = session.apply(action);
            let button = &mut session.buttons[i];
            if button.kind == ButtonKind::Checkbox {
                button.set_checked(outcome);
            }
        }
    }
}

/// Full redraws repaint the scene (and composite the dim overlay under an
/// open dialog); partial redraws repaint only the dialog over the retained
/// frame. Either way the dialog reports its dirty rectangle for the next
/// frame's plan.
fn render(session: &mut GameSession, hud: &Hud, dt: f32) {
    let newly_opened = session
        .active_index()
        .map(|ix| session.dialogs[ix].newly_opened())
        .unwrap_or(false);

    match session.zones.plan(newly_opened) {
        Present::Full => {
            scene::draw_full(session, hud, dt);
            if let Some(ix) = session.active_index() {
                scene::draw_dim_overlay();
                let rect = session.dialogs[ix].draw(dt);
                session.zones.push(rect);
                session.dialogs[ix].acknowledge_full_present();
            }
        }
        Present::Partial(_rects) => {
            if let Some(ix) = session.active_index() {
                let rect = session.dialogs[ix].draw(dt);
                session.zones.push(rect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette;
    use crate::core::GameResolution;
    use crate::state::{content, ButtonAction};
    use crate::ui::Button;

    fn session() -> GameSession {
        let res = GameResolution::new(vec2(2560.0, 1440.0), vec2(1280.0, 720.0));
        let mut s = content::build_session(res);
        s.begin_frame(1.0 / 60.0);
        s.buttons.clear();
        s
    }

    fn normal(actions: Vec<ButtonAction>) -> Button {
        Button::new(
            ButtonKind::Normal,
            vec2(400.0, 400.0),
            vec2(100.0, 100.0),
            None,
            [palette::ORANGE, palette::LIME],
            actions,
        )
    }

    // screen-space click landing on native (400,400) at half scale
    fn click() -> InputFrame {
        InputFrame::synthetic(vec2(200.0, 200.0), true)
    }

    #[test]
    fn consumed_click_stops_polling_later_buttons() {
        let mut s = session();
        s.buttons.push(normal(vec![ButtonAction::BuildMine]));
        // exactly underneath the first; must never be polled
        s.buttons.push(normal(vec![ButtonAction::AdvanceYear]));
        let mines = s.data.mines;

        route_input(&mut s, &click());

        assert_eq!(s.data.mines, mines + 1);
        assert_eq!(s.data.year, 1);
        assert_eq!(s.active_dialog, None);
    }

    #[test]
    fn standalone_checkbox_gets_its_toggle_written_back() {
        let mut s = session();
        s.buttons.push(Button::new(
            ButtonKind::Checkbox,
            vec2(400.0, 400.0),
            vec2(100.0, 100.0),
            None,
            [palette::PURPLE, palette::LIME],
            vec![ButtonAction::ToggleFps],
        ));

        route_input(&mut s, &click());
        assert!(s.show_fps);
        assert!(s.buttons[0].checked);

        route_input(&mut s, &click());
        assert!(!s.show_fps);
        assert!(!s.buttons[0].checked);
    }
}
