//! Pointer state polled once per frame by the camera controller.
//!
//! Winit delivers input as discrete events; the camera wants a per-frame
//! snapshot. `Input` accumulates events between frames (cursor deltas and
//! scroll sum across multiple events) and is cleared by `begin_frame` after
//! the frame has consumed it.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<WinitMouseButton> for MouseButton {
    fn from(btn: WinitMouseButton) -> Self {
        match btn {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Left, // Default for other buttons
        }
    }
}

/// Accumulated pointer state for the current frame.
#[derive(Debug, Default)]
pub struct Input {
    pub(crate) buttons_held: HashSet<MouseButton>,
    pub(crate) cursor_position: Option<Vec2>,
    pub(crate) cursor_delta: Vec2,
    pub(crate) scroll_delta: f32,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a mouse button is currently held down.
    pub fn mouse_held(&self, button: MouseButton) -> bool {
        self.buttons_held.contains(&button)
    }

    /// Cursor movement accumulated since the last `begin_frame`, in pixels.
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor_delta
    }

    /// Scroll wheel movement accumulated since the last `begin_frame`.
    ///
    /// Positive values indicate scrolling up/forward.
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Clear per-frame accumulators. Held buttons persist.
    pub fn begin_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let btn = MouseButton::from(*button);
                match state {
                    ElementState::Pressed => {
                        self.buttons_held.insert(btn);
                    }
                    ElementState::Released => {
                        self.buttons_held.remove(&btn);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = Vec2::new(position.x as f32, position.y as f32);
                if let Some(last) = self.cursor_position {
                    self.cursor_delta += new_pos - last;
                }
                self.cursor_position = Some(new_pos);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_state_persists_across_frames() {
        let mut input = Input::new();
        assert!(!input.mouse_held(MouseButton::Left));

        input.buttons_held.insert(MouseButton::Left);
        assert!(input.mouse_held(MouseButton::Left));

        input.begin_frame();
        assert!(input.mouse_held(MouseButton::Left));

        input.buttons_held.remove(&MouseButton::Left);
        assert!(!input.mouse_held(MouseButton::Left));
    }

    #[test]
    fn deltas_accumulate_and_clear() {
        let mut input = Input::new();
        input.cursor_position = Some(Vec2::ZERO);
        input.cursor_delta += Vec2::new(3.0, -1.0);
        input.cursor_delta += Vec2::new(2.0, 2.0);
        input.scroll_delta += 1.5;

        assert_eq!(input.cursor_delta(), Vec2::new(5.0, 1.0));
        assert_eq!(input.scroll_delta(), 1.5);

        input.begin_frame();
        assert_eq!(input.cursor_delta(), Vec2::ZERO);
        assert_eq!(input.scroll_delta(), 0.0);
    }

    #[test]
    fn first_cursor_position_produces_no_delta() {
        let input = Input::new();
        // No prior position: a jump to an absolute position is not a drag.
        assert_eq!(input.cursor_position, None);
        assert_eq!(input.cursor_delta(), Vec2::ZERO);
    }
}
