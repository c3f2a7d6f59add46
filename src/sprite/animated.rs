use macroquad::prelude::*;

use crate::core::GameResolution;
use crate::sprite::{AssetError, Sprite};

/// Frame-cursor state machine for an animation: which frame is showing, how
/// long until the next one, and whether advancement is paused. Kept separate
/// from the texture data so the timing contract is testable headless.
#[derive(Clone, Debug)]
pub struct Playback {
    num_frames: usize,
    frame_length: f32,
    time_until_next: f32,
    current: usize,
    pub paused: bool,
}

impl Playback {
    pub fn new(num_frames: usize, frame_length: f32) -> Self {
        assert!(num_frames > 0, "animation needs at least one frame");
        Playback {
            num_frames,
            frame_length,
            time_until_next: frame_length,
            current: 0,
            paused: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance the countdown by `dt`; on expiry step to the next frame,
    /// wrapping at the end. Call exactly once per simulation frame —
    /// calling it zero or multiple times per frame desynchronizes the
    /// animation from the frame clock.
    pub fn tick(&mut self, dt: f32) {
        self.time_until_next -= dt;
        if self.time_until_next <= 0.0 {
            if !self.paused {
                self.current = (self.current + 1) % self.num_frames;
            }
            self.time_until_next = self.frame_length;
        }
    }
}

/// An ordered sequence of sprites played on a per-instance clock.
pub struct AnimatedSprite {
    frames: Vec<Sprite>,
    playback: Playback,
}

impl AnimatedSprite {
    pub fn new(frames: Vec<Sprite>, frame_length: f32) -> Self {
        let playback = Playback::new(frames.len(), frame_length);
        AnimatedSprite { frames, playback }
    }

    /// Load every `.png` in `dir` as one frame each, in filename order.
    pub async fn load_dir(
        dir: &str,
        frame_length: f32,
        res: &GameResolution,
    ) -> Result<Self, AssetError> {
        let entries = std::fs::read_dir(dir).map_err(|source| AssetError::Io {
            path: dir.to_string(),
            source,
        })?;
        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().map_or(false, |ext| ext == "png"))
            .collect();
        paths.sort();
        if paths.is_empty() {
            return Err(AssetError::EmptyAnimation {
                path: dir.to_string(),
            });
        }

        let mut frames = Vec::with_capacity(paths.len());
        for path in &paths {
            frames.push(Sprite::load(&path.to_string_lossy(), res).await?);
        }
        Ok(AnimatedSprite::new(frames, frame_length))
    }

    pub fn tick(&mut self, dt: f32) {
        self.playback.tick(dt);
    }

    pub fn current_frame(&self) -> &Sprite {
        &self.frames[self.playback.current()]
    }

    pub fn draw(&self, pos: Vec2, res: &GameResolution, centered: bool) {
        self.current_frame().draw(pos, res, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_one_frame_per_elapsed_length() {
        let mut p = Playback::new(4, 100.0);
        for k in 1..=9 {
            p.tick(100.0);
            assert_eq!(p.current(), k % 4, "after {k} ticks of one frame length");
        }
    }

    #[test]
    fn does_not_advance_before_expiry() {
        let mut p = Playback::new(3, 100.0);
        p.tick(60.0);
        assert_eq!(p.current(), 0);
        p.tick(60.0);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn pause_suppresses_advancement_but_keeps_clock() {
        let mut p = Playback::new(3, 100.0);
        p.paused = true;
        p.tick(100.0);
        p.tick(100.0);
        assert_eq!(p.current(), 0);
        p.paused = false;
        p.tick(100.0);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn wraps_to_first_frame() {
        let mut p = Playback::new(2, 50.0);
        p.tick(50.0);
        assert_eq!(p.current(), 1);
        p.tick(50.0);
        assert_eq!(p.current(), 0);
    }

    #[test]
    #[should_panic]
    fn zero_frames_is_rejected() {
        let _ = Playback::new(0, 100.0);
    }
}
