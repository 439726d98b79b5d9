//! Pointer input for control interaction.
//!
//! The host feeds raw pointer events; controls ask two questions of it each
//! frame: "is a press in progress over me?" and "was I tapped?".

use crate::layout::Rect;

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer X position.
    pub pointer_x: f32,
    /// Current pointer Y position.
    pub pointer_y: f32,
    /// Pointer went down this frame.
    pressed: bool,
    /// Pointer went up this frame.
    released: bool,
    /// Pointer is currently held.
    down: bool,
    /// Where the current (or just released) press started.
    press_origin: Option<(f32, f32)>,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame state.
    pub fn begin_frame(&mut self) {
        self.pressed = false;
        if self.released {
            self.press_origin = None;
        }
        self.released = false;
    }

    /// Updates pointer position.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    /// Records the pointer going down at `(x, y)`.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer_moved(x, y);
        self.pressed = true;
        self.down = true;
        self.press_origin = Some((x, y));
    }

    /// Records the pointer going up at `(x, y)`.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pointer_moved(x, y);
        self.released = true;
        self.down = false;
    }

    /// Convenience: a complete tap (down then up) at `(x, y)` within one frame.
    pub fn tap(&mut self, x: f32, y: f32) {
        self.pointer_down(x, y);
        self.pointer_up(x, y);
    }

    /// Returns true if the pointer went down this frame.
    #[must_use]
    pub fn pointer_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true if the pointer is currently held.
    #[must_use]
    pub fn pointer_held(&self) -> bool {
        self.down
    }

    /// Returns true while a press that began inside `rect` is held over it.
    ///
    /// Dragging off the control un-presses it; dragging back re-presses it.
    #[must_use]
    pub fn is_pressing(&self, rect: Rect) -> bool {
        self.down && self.began_in(rect) && rect.contains(self.pointer_x, self.pointer_y)
    }

    /// Returns true if a press that began inside `rect` was released inside it
    /// this frame.
    #[must_use]
    pub fn tapped(&self, rect: Rect) -> bool {
        self.released && self.began_in(rect) && rect.contains(self.pointer_x, self.pointer_y)
    }

    fn began_in(&self, rect: Rect) -> bool {
        self.press_origin
            .is_some_and(|(x, y)| rect.contains(x, y))
    }
}
