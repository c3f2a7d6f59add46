use macroquad::prelude::*;

use crate::core::{palette, GameResolution, Rgba};
use crate::input::InputFrame;
use crate::state::ButtonAction;
use crate::ui::button::Button;
use crate::ui::text::Label;
use crate::ui::zoom::ZoomAnimation;

/// One piece of dialog text: a renderable label, its position inside the
/// dialog in native coordinates, and whether it is centered on that point.
#[derive(Clone, Debug)]
pub struct TextItem {
    pub label: Label,
    pub pos: Vec2,
    pub centered: bool,
}

impl TextItem {
    pub fn new(label: Label, pos: Vec2, centered: bool) -> Self {
        TextItem {
            label,
            pos,
            centered,
        }
    }
}

/// Everything a dialog displays: panel color, text items and buttons.
pub struct DialogContent {
    pub colour: Rgba,
    pub text: Vec<TextItem>,
    pub buttons: Vec<Button>,
}

/// An action fired from inside a dialog, tagged with the index of the button
/// that fired it so checkbox outcomes can be written back.
#[derive(Copy, Clone, Debug)]
pub struct Fired {
    pub button: usize,
    pub action: ButtonAction,
}

/// A modal dialog. Composes its content on a private surface at native
/// scale, zooms that surface open, dispatches pointer input remapped into
/// its local coordinate space, and reports the screen rectangle it occupies
/// as the frame's dirty region.
pub struct InfoBox {
    size: Vec2,
    scaled_size: Vec2,
    /// Screen-space center, pre-scaled at construction.
    pos: Vec2,
    res: GameResolution,
    pub content: DialogContent,
    animation: ZoomAnimation,
    newly_opened: bool,
    mouse_local: Vec2,
    // created on first draw so construction stays headless
    surface: Option<RenderTarget>,
}

/// Screen rectangle a dialog of `scaled_size` centered on `pos` occupies.
/// This is the dirty-rect contract: always the stable (fully open) extent,
/// even while the zoom transition is still running.
pub fn dialog_screen_rect(pos: Vec2, scaled_size: Vec2) -> Rect {
    Rect::new(
        pos.x - scaled_size.x / 2.0,
        pos.y - scaled_size.y / 2.0,
        scaled_size.x,
        scaled_size.y,
    )
}

/// Remap a raw screen-space pointer into dialog-local native coordinates:
/// shift by the dialog's top-left, then undo the resolution scaling.
pub fn dialog_local_cursor(mouse: Vec2, pos: Vec2, scaled_size: Vec2, size: Vec2) -> Vec2 {
    let top_left = pos - scaled_size / 2.0;
    (mouse - top_left) * (size / scaled_size)
}

impl InfoBox {
    pub fn new(
        size: Vec2,
        pos: Vec2,
        res: GameResolution,
        content: DialogContent,
        animation: ZoomAnimation,
    ) -> Self {
        InfoBox {
            size,
            scaled_size: size * res.factor,
            pos: res.to_screen(pos),
            res,
            content,
            animation,
            newly_opened: true,
            mouse_local: Vec2::ZERO,
            surface: None,
        }
    }

    pub fn newly_opened(&self) -> bool {
        self.newly_opened
    }

    /// Called by the scheduler once the full-screen present after opening
    /// has gone out, so later frames can fall back to partial updates.
    pub fn acknowledge_full_present(&mut self) {
        self.newly_opened = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_playing()
    }

    pub fn screen_rect(&self) -> Rect {
        dialog_screen_rect(self.pos, self.scaled_size)
    }

    /// Typed `redefine_data`: swap the text items (used to refresh the
    /// yearly report before each open).
    pub fn set_text(&mut self, text: Vec<TextItem>) {
        self.content.text = text;
    }

    pub fn set_colour(&mut self, colour: Rgba) {
        self.content.colour = colour;
    }

    /// Re-arm the open transition. The dimming overlay behind the dialog
    /// needs one full-screen present before partial updates resume, so the
    /// newly-opened flag goes up until the scheduler acknowledges it.
    pub fn open(&mut self, dt: f32) {
        self.newly_opened = true;
        self.animation.play(dt);
    }

    /// Route a frame of input to the contained buttons. No-op while the
    /// open transition is still playing. Stops at the first button that
    /// consumes the click.
    pub fn process(&mut self, input: &InputFrame) -> Vec<Fired> {
        if self.animation.is_playing() {
            return Vec::new();
        }

        self.mouse_local =
            dialog_local_cursor(input.mouse, self.pos, self.scaled_size, self.size);

        let mut fired = Vec::new();
        for (i, button) in self.content.buttons.iter_mut().enumerate() {
            let activation = button.check(self.mouse_local, input.primary_click());
            let consumed = activation.consumed;
            fired.extend(
                activation
                    .fired
                    .into_iter()
                    .map(|action| Fired { button: i, action }),
            );
            if consumed {
                break;
            }
        }
        fired
    }

    /// Compose and blit the dialog; returns the dirty rectangle for the
    /// scheduler.
    pub fn draw(&mut self, dt: f32) -> Rect {
        let size = self.size;
        let surface = self
            .surface
            .get_or_insert_with(|| render_target(size.x as u32, size.y as u32))
            .clone();

        set_camera(&Camera2D {
            render_target: Some(surface.clone()),
            ..Camera2D::from_display_rect(Rect::new(0.0, 0.0, size.x, size.y))
        });

        clear_background(palette::DIALOG_FRAME.to_mq());
        let offset = 5.0 * self.res.factor.x;
        draw_rectangle(
            offset,
            offset,
            size.x - offset * 2.0,
            size.y - offset * 2.0,
            palette::DIALOG_BORDER.to_mq(),
        );
        draw_rectangle(
            offset * 2.0,
            offset * 2.0,
            size.x - offset * 4.0,
            size.y - offset * 4.0,
            self.content.colour.to_mq(),
        );

        // the surface is native-scale; buttons and text draw unscaled
        let local = GameResolution::identity();
        for button in &mut self.content.buttons {
            button.draw(&local, dt);
        }
        for item in &self.content.text {
            item.label.draw(item.pos, item.centered, 1.0);
        }

        set_default_camera();

        let drawn_size = if self.animation.is_playing() {
            self.scaled_size * self.animation.play(dt)
        } else {
            self.scaled_size
        };
        draw_texture_ex(
            &surface.texture,
            self.pos.x - drawn_size.x / 2.0,
            self.pos.y - drawn_size.y / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(drawn_size),
                // render targets come out y-flipped in OpenGL
                flip_y: true,
                ..Default::default()
            },
        );

        self.screen_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::button::ButtonKind;
    use crate::ui::text::TextStyle;

    fn test_res() -> GameResolution {
        GameResolution::new(vec2(2560.0, 1440.0), vec2(1280.0, 720.0))
    }

    fn close_button() -> Button {
        Button::new(
            ButtonKind::Normal,
            vec2(600.0, 700.0),
            vec2(200.0, 80.0),
            Some(Label::new("CLOSE", TextStyle::Small, palette::BLACK)),
            [palette::ORANGE, palette::LIME],
            vec![ButtonAction::CloseDialog],
        )
    }

    fn test_box(steps: u32) -> InfoBox {
        InfoBox::new(
            vec2(1200.0, 800.0),
            vec2(1280.0, 720.0),
            test_res(),
            DialogContent {
                colour: palette::AQUA,
                text: Vec::new(),
                buttons: vec![close_button()],
            },
            ZoomAnimation::new(steps, 10.0),
        )
    }

    #[test]
    fn dirty_rect_is_scaled_size_centered_on_pos() {
        let b = test_box(4);
        // pos (1280,720) native -> (640,360) screen; size (1200,800) -> (600,400)
        assert_eq!(b.screen_rect(), Rect::new(340.0, 160.0, 600.0, 400.0));
    }

    #[test]
    fn local_cursor_inverts_scaling_and_offset() {
        let pos = vec2(640.0, 360.0);
        let scaled = vec2(600.0, 400.0);
        let size = vec2(1200.0, 800.0);
        // dialog top-left on screen is (340,160); its center must map to the
        // center of the native-size surface
        assert_eq!(dialog_local_cursor(pos, pos, scaled, size), size / 2.0);
        assert_eq!(
            dialog_local_cursor(vec2(340.0, 160.0), pos, scaled, size),
            Vec2::ZERO
        );
    }

    #[test]
    fn process_is_noop_while_opening() {
        let mut b = test_box(4);
        b.open(0.0);
        assert!(b.is_animating());

        // click dead center on the close button; must not fire
        let input = InputFrame::synthetic(vec2(640.0, 360.0), true);
        assert!(b.process(&input).is_empty());
    }

    #[test]
    fn process_dispatches_once_open() {
        let mut b = test_box(1);
        b.open(10.0); // single-step transition finishes immediately
        assert!(!b.is_animating());

        // button center (600,700) in dialog-local native coords; map it to
        // screen: top_left (340,160) + (600,700) * scaled/size
        let screen = vec2(340.0, 160.0) + vec2(600.0, 700.0) * vec2(0.5, 0.5);
        let input = InputFrame::synthetic(screen, true);
        let fired = b.process(&input);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].button, 0);
        assert_eq!(fired[0].action, ButtonAction::CloseDialog);
    }

    #[test]
    fn consumed_click_polls_no_further_buttons() {
        let mut b = test_box(1);
        // a second button exactly under the first; the consumed click must
        // never reach it
        b.content.buttons.push(close_button());
        b.open(10.0);

        let screen = vec2(340.0, 160.0) + vec2(600.0, 700.0) * vec2(0.5, 0.5);
        let fired = b.process(&InputFrame::synthetic(screen, true));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].button, 0);
    }

    #[test]
    fn reopen_rearms_transition_and_flag() {
        let mut b = test_box(1);
        b.open(10.0);
        b.acknowledge_full_present();
        assert!(!b.newly_opened());

        b.open(0.0);
        assert!(b.newly_opened());
        assert!(b.is_animating());
    }
}
