/// Frame-stepped open/close transition: a scalar interpolator from 0 to 1
/// across a fixed number of discrete steps, each held for `frame_length`.
/// Any UI element that wants a zoom-in transition multiplies its rendered
/// dimension by the fraction this returns.
#[derive(Clone, Debug)]
pub struct ZoomAnimation {
    steps: u32,
    frame_length: f32,
    current: u32,
    time_until_next: f32,
    playing: bool,
}

impl ZoomAnimation {
    pub fn new(steps: u32, frame_length: f32) -> Self {
        assert!(steps > 0, "zoom animation needs at least one step");
        ZoomAnimation {
            steps,
            frame_length,
            current: 0,
            time_until_next: frame_length,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Step the transition and return the current scale fraction in [0, 1].
    ///
    /// Called while idle this restarts from step 0, regardless of where the
    /// previous run ended — that is the dialog-reopen behavior. Called while
    /// playing it only advances the clock, so it must be invoked at most
    /// once per frame.
    pub fn play(&mut self, dt: f32) -> f32 {
        if !self.playing {
            self.playing = true;
            self.current = 0;
            self.time_until_next = self.frame_length;
        }

        self.time_until_next -= dt;
        if self.time_until_next <= 0.0 {
            self.time_until_next = self.frame_length;
            if self.current < self.steps {
                self.current += 1;
                if self.current == self.steps {
                    self.playing = false;
                }
            }
        }

        self.current as f32 / self.steps as f32
    }
}
