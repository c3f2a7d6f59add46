use macroquad::prelude::*;

use crate::core::{GameResolution, Rgba};
use crate::sprite::{AnimatedSprite, Sprite};
use crate::state::ButtonAction;
use crate::ui::text::Label;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Normal,
    Checkbox,
}

pub enum SpriteKind {
    Static(Sprite),
    Animated(AnimatedSprite),
}

impl SpriteKind {
    fn native_size(&self) -> Vec2 {
        match self {
            SpriteKind::Static(s) => s.native_size(),
            SpriteKind::Animated(a) => a.current_frame().native_size(),
        }
    }
}

/// Idle/hover visual pair that replaces the colored-rect rendering.
pub struct ButtonVisuals {
    pub idle: SpriteKind,
    pub hover: SpriteKind,
}

impl ButtonVisuals {
    fn current(&self, hovered: bool) -> &SpriteKind {
        if hovered {
            &self.hover
        } else {
            &self.idle
        }
    }

    fn current_mut(&mut self, hovered: bool) -> &mut SpriteKind {
        if hovered {
            &mut self.hover
        } else {
            &mut self.idle
        }
    }
}

/// What a `check` call produced. `consumed` means a Normal button took the
/// click; the caller must stop polling further buttons this frame.
#[derive(Default, Debug)]
pub struct Activation {
    pub fired: Vec<ButtonAction>,
    pub consumed: bool,
}

/// An interactive control authored in native coordinates: `pos` is the
/// center, `size` the hit extent when no visual is set. Hover is recomputed
/// by `check` every frame and cleared at the end of every `draw`.
pub struct Button {
    pub kind: ButtonKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub label: Option<Label>,
    pub colors: [Rgba; 2],
    pub visuals: Option<ButtonVisuals>,
    pub actions: Vec<ButtonAction>,
    pub checked: bool,
    hovered: bool,
}

impl Button {
    pub fn new(
        kind: ButtonKind,
        pos: Vec2,
        size: Vec2,
        label: Option<Label>,
        colors: [Rgba; 2],
        actions: Vec<ButtonAction>,
    ) -> Self {
        Button {
            kind,
            pos,
            size,
            label,
            colors,
            visuals: None,
            actions,
            checked: false,
            hovered: false,
        }
    }

    pub fn with_visuals(mut self, visuals: ButtonVisuals) -> Self {
        self.visuals = Some(visuals);
        self
    }

    /// Hit rectangle in native coordinates. With a visual set, the rectangle
    /// follows the extent of whichever sprite is currently showing.
    pub fn hit_rect(&self) -> Rect {
        let extent = match &self.visuals {
            Some(v) => v.current(self.hovered).native_size(),
            None => self.size,
        };
        Rect::new(
            self.pos.x - extent.x / 2.0,
            self.pos.y - extent.y / 2.0,
            extent.x,
            extent.y,
        )
    }

    /// The rectangle `draw` fills on screen when no visual is set.
    pub fn screen_rect(&self, res: &GameResolution) -> Rect {
        let top_left = res.to_screen(self.pos - self.size / 2.0);
        let size = self.size * res.factor;
        Rect::new(top_left.x, top_left.y, size.x, size.y)
    }

    /// Hit-test the (native-space) pointer and dispatch a click. A Normal
    /// button fires every action in order and consumes the click; a checkbox
    /// fires only its first action, whose boolean outcome the session writes
    /// back via `set_checked`.
    pub fn check(&mut self, mouse: Vec2, clicked: bool) -> Activation {
        let mut activation = Activation::default();
        if !self.hit_rect().contains(mouse) {
            return activation;
        }
        self.hovered = true;

        if clicked {
            match self.kind {
                ButtonKind::Normal => {
                    activation.fired = self.actions.clone();
                    activation.consumed = true;
                }
                ButtonKind::Checkbox => {
                    if let Some(first) = self.actions.first() {
                        activation.fired.push(*first);
                    }
                }
            }
        }
        activation
    }

    pub fn set_checked(&mut self, on: bool) {
        self.checked = on;
    }

    pub fn draw(&mut self, res: &GameResolution, dt: f32) {
        if let Some(visuals) = &mut self.visuals {
            let sprite = visuals.current_mut(self.hovered);
            if let SpriteKind::Animated(anim) = sprite {
                anim.tick(dt);
            }
            match sprite {
                SpriteKind::Static(s) => s.draw(self.pos, res, true),
                SpriteKind::Animated(a) => a.draw(self.pos, res, true),
            }
        } else {
            let rect = self.screen_rect(res);
            let color = self.colors[usize::from(self.hovered)];
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color.to_mq());

            if self.kind == ButtonKind::Checkbox {
                let inset = self.size / 8.0 * res.factor;
                draw_rectangle(
                    rect.x + inset.x,
                    rect.y + inset.y,
                    rect.w - inset.x * 2.0,
                    rect.h - inset.y * 2.0,
                    color.darken(40).to_mq(),
                );
            }
        }

        let show_label = match self.kind {
            ButtonKind::Normal => true,
            ButtonKind::Checkbox => self.checked,
        };
        if show_label {
            if let Some(label) = &self.label {
                label.draw(res.to_screen(self.pos), true, res.factor.y);
            }
        }

        // hover is a per-frame fact; check() re-establishes it next frame
        self.hovered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette;
    use crate::state::DialogId;

    fn button(kind: ButtonKind, actions: Vec<ButtonAction>) -> Button {
        Button::new(
            kind,
            vec2(2400.0, 1180.0),
            vec2(160.0, 90.0),
            None,
            [palette::ORANGE, palette::LIME],
            actions,
        )
    }

    #[test]
    fn pointer_inside_fires_every_action_and_consumes() {
        let mut b = button(
            ButtonKind::Normal,
            vec![ButtonAction::AdvanceYear, ButtonAction::CloseDialog],
        );
        let act = b.check(vec2(2400.0, 1180.0), true);
        assert_eq!(
            act.fired,
            vec![ButtonAction::AdvanceYear, ButtonAction::CloseDialog]
        );
        assert!(act.consumed);
        assert!(b.hovered);
    }

    #[test]
    fn pointer_on_edge_is_a_hit() {
        let mut b = button(ButtonKind::Normal, vec![ButtonAction::CloseDialog]);
        // left edge: pos.x - size.x / 2
        let act = b.check(vec2(2320.0, 1180.0), true);
        assert!(act.consumed);
    }

    #[test]
    fn pointer_outside_fires_nothing_and_clears_hover() {
        let mut b = button(ButtonKind::Normal, vec![ButtonAction::AdvanceYear]);
        let act = b.check(vec2(100.0, 100.0), true);
        assert!(act.fired.is_empty());
        assert!(!act.consumed);
        assert!(!b.hovered);
    }

    #[test]
    fn hover_without_click_fires_nothing() {
        let mut b = button(ButtonKind::Normal, vec![ButtonAction::AdvanceYear]);
        let act = b.check(vec2(2400.0, 1180.0), false);
        assert!(act.fired.is_empty());
        assert!(b.hovered);
    }

    #[test]
    fn checkbox_fires_first_action_only_and_does_not_consume() {
        let mut b = button(
            ButtonKind::Checkbox,
            vec![ButtonAction::ToggleFps, ButtonAction::OpenDialog(DialogId::Trade)],
        );
        let act = b.check(vec2(2400.0, 1180.0), true);
        assert_eq!(act.fired, vec![ButtonAction::ToggleFps]);
        assert!(!act.consumed);
    }

    #[test]
    fn screen_rect_scales_native_half_extents() {
        let res = GameResolution::new(vec2(2560.0, 1440.0), vec2(1280.0, 720.0));
        let b = button(ButtonKind::Normal, vec![]);
        let rect = b.screen_rect(&res);
        assert_eq!(rect, Rect::new(1200.0 - 40.0, 590.0 - 22.5, 80.0, 45.0));
    }
}
