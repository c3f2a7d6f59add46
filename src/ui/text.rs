use macroquad::prelude::*;

use crate::core::Rgba;

/// Text size ramp, authored in native-resolution pixels. Sizes are scaled by
/// the resolution factor at draw time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Tiny,
    Small,
    SmallBold,
    Medium,
    Large,
    MediumBold,
    LargeBold,
}

impl TextStyle {
    pub fn base_px(self) -> f32 {
        match self {
            TextStyle::Tiny => 16.0,
            TextStyle::Small | TextStyle::SmallBold => 24.0,
            TextStyle::Medium => 32.0,
            TextStyle::Large | TextStyle::MediumBold => 48.0,
            TextStyle::LargeBold => 64.0,
        }
    }
}

/// A piece of renderable text. Plain data; rasterization happens at draw.
#[derive(Clone, Debug)]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
    pub color: Rgba,
}

impl Label {
    pub fn new(text: impl Into<String>, style: TextStyle, color: Rgba) -> Self {
        Label {
            text: text.into(),
            style,
            color,
        }
    }

    /// Draw at a screen-space position. `scale` is the resolution factor's
    /// y component (1.0 inside native-scale surfaces).
    pub fn draw(&self, pos: Vec2, centered: bool, scale: f32) {
        let px = self.style.base_px() * scale;
        let color = self.color.to_mq();
        if centered {
            let dims = measure_text(&self.text, None, px as u16, 1.0);
            draw_text(
                &self.text,
                pos.x - dims.width / 2.0,
                pos.y + dims.height / 2.0,
                px,
                color,
            );
        } else {
            draw_text(&self.text, pos.x, pos.y + px, px, color);
        }
    }
}
