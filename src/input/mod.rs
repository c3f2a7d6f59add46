use macroquad::prelude::*;

/// One frame's worth of input, snapshotted at the top of the frame so every
/// component sees the same state. The core never touches raw devices past
/// this point.
#[derive(Clone, Debug)]
pub struct InputFrame {
    /// Pointer position in current-display pixel space.
    pub mouse: Vec2,
    /// Left / middle / right press edges this frame.
    pub clicks: [bool; 3],
    /// Discrete key-down events this frame.
    pub keys: Vec<KeyCode>,
    pub quit: bool,
}

impl InputFrame {
    pub fn poll() -> Self {
        let keys: Vec<KeyCode> = get_keys_pressed().into_iter().collect();
        let quit = keys.contains(&KeyCode::Escape);
        InputFrame {
            mouse: Vec2::from(mouse_position()),
            clicks: [
                is_mouse_button_pressed(MouseButton::Left),
                is_mouse_button_pressed(MouseButton::Middle),
                is_mouse_button_pressed(MouseButton::Right),
            ],
            keys,
            quit,
        }
    }

    /// Build a frame by hand; used by tests to drive UI components.
    pub fn synthetic(mouse: Vec2, left_click: bool) -> Self {
        InputFrame {
            mouse,
            clicks: [left_click, false, false],
            keys: Vec::new(),
            quit: false,
        }
    }

    pub fn primary_click(&self) -> bool {
        self.clicks[0]
    }
}
