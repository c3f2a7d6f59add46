use macroquad::prelude::*;

/// Frame-rate readout, averaged over one-second windows.
pub struct Hud {
    fps: i32,
    accum_time: f32,
    accum_frames: i32,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            fps: 0,
            accum_time: 0.0,
            accum_frames: 0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.accum_time += dt;
        self.accum_frames += 1;
        if self.accum_time >= 1.0 {
            self.fps = (self.accum_frames as f32 / self.accum_time).round() as i32;
            self.accum_time = 0.0;
            self.accum_frames = 0;
        }
    }

    pub fn draw(&self) {
        let text = format!("FPS: {}", self.fps);
        draw_text(&text, 10.0, screen_height() - 14.0, 18.0, BLACK);
    }
}

impl Default for Hud {
    fn default() -> Self {
        Hud::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_one_second_windows() {
        let mut hud = Hud::new();
        for _ in 0..60 {
            hud.update(1.0 / 60.0);
        }
        assert_eq!(hud.fps, 60);
    }

    #[test]
    fn no_reading_before_the_first_window_closes() {
        let mut hud = Hud::new();
        hud.update(0.5);
        assert_eq!(hud.fps, 0);
    }
}
