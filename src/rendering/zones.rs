use macroquad::prelude::*;

/// What the renderer should do this frame.
#[derive(Debug, PartialEq)]
pub enum Present {
    /// Clear and redraw the whole scene.
    Full,
    /// Redraw only these screen regions over the retained frame.
    Partial(Vec<Rect>),
}

/// Per-frame redraw scheduler. Renderers report the screen rectangles they
/// touched; the next frame is then limited to those regions unless a full
/// composite is required — either because nothing is pending (no modal is
/// restricting redraws) or because a dialog just opened and the dimming
/// overlay behind it has to reach the backbuffer once before partial
/// updates resume.
#[derive(Default)]
pub struct UpdateZones {
    pending: Vec<Rect>,
}

impl UpdateZones {
    pub fn new() -> Self {
        UpdateZones::default()
    }

    pub fn push(&mut self, rect: Rect) {
        self.pending.push(rect);
    }

    /// Drop everything pending, forcing the next frame to be a full redraw.
    /// Called when a dialog closes and the scene behind it must repaint.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn pending(&self) -> &[Rect] {
        &self.pending
    }

    /// Decide this frame's presentation. When this returns `Full` with
    /// `newly_opened` set, the caller must acknowledge the dialog's flag so
    /// subsequent frames fall through to partial updates.
    pub fn plan(&mut self, newly_opened: bool) -> Present {
        if self.pending.is_empty() {
            Present::Full
        } else if newly_opened {
            self.pending.clear();
            Present::Full
        } else {
            Present::Partial(std::mem::take(&mut self.pending))
        }
    }
}
