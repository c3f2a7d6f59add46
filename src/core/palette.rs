#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Darken each channel by `amount`, saturating at 0. Used for the inset
    /// panel of checkbox buttons.
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }
}

pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

pub const AQUA: Rgba = Rgba::rgb(127, 224, 227);
pub const YELLOW: Rgba = Rgba::rgb(255, 235, 84);
pub const ORANGE: Rgba = Rgba::rgb(242, 141, 63);
pub const LIME: Rgba = Rgba::rgb(128, 207, 72);
pub const PURPLE: Rgba = Rgba::rgb(186, 81, 194);

pub const SKY: Rgba = Rgba::rgb(148, 196, 232);
pub const GROUND: Rgba = Rgba::rgb(120, 92, 62);
pub const SHAFT: Rgba = Rgba::rgb(54, 40, 28);
pub const DIALOG_FRAME: Rgba = Rgba::rgb(235, 231, 221);
pub const DIALOG_BORDER: Rgba = Rgba::rgb(86, 74, 58);
pub const DIM: Rgba = Rgba::rgba(0, 0, 0, 128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_subtracts_each_channel() {
        let c = Rgba::rgb(200, 100, 50);
        assert_eq!(c.darken(40), Rgba::rgb(160, 60, 10));
    }

    #[test]
    fn darken_saturates_at_zero() {
        let c = Rgba::rgb(30, 0, 255);
        assert_eq!(c.darken(40), Rgba::rgb(0, 0, 215));
    }

    #[test]
    fn darken_leaves_alpha_alone() {
        let c = Rgba::rgba(90, 90, 90, 77);
        assert_eq!(c.darken(40).a, 77);
    }
}
