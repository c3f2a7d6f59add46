use macroquad::prelude::*;

/// Fixed design-time coordinate space all gameplay/UI elements are authored in.
pub const NATIVE_WIDTH: f32 = 2560.0;
pub const NATIVE_HEIGHT: f32 = 1440.0;

/// Native (design) resolution, actual display resolution, and the per-axis
/// scaling factor between them. Built once at startup and copied around;
/// everything authored at native resolution is multiplied by `factor` before
/// it reaches the screen, and pointer input is divided by it on the way back.
#[derive(Copy, Clone, Debug)]
pub struct GameResolution {
    pub native: Vec2,
    pub current: Vec2,
    pub factor: Vec2,
}

impl GameResolution {
    pub fn new(native: Vec2, current: Vec2) -> Self {
        debug_assert!(native.x > 0.0 && native.y > 0.0);
        debug_assert!(current.x > 0.0 && current.y > 0.0);
        GameResolution {
            native,
            current,
            factor: current / native,
        }
    }

    /// Resolution context for surfaces that are already at native scale
    /// (e.g. a dialog's private compositing surface).
    pub fn identity() -> Self {
        let native = vec2(NATIVE_WIDTH, NATIVE_HEIGHT);
        GameResolution::new(native, native)
    }

    /// Convert a native-resolution point to screen pixels.
    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        p * self.factor
    }

    /// Map a pointer position in screen pixels back to native coordinates.
    pub fn to_native(&self, p: Vec2) -> Vec2 {
        p / self.factor
    }
}
