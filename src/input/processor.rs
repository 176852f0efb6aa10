//! Folds raw platform events into one [`InputSnapshot`] per frame.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! button state, active touches, scroll accumulated since the last frame)
//! and is the only thing that sits between raw window events and
//! [`OrbitController::tick`](crate::camera::OrbitController::tick).

use glam::Vec2;

use super::event::{InputEvent, MouseButton, TouchPhase};
use super::snapshot::{InputSnapshot, TouchPinch, TouchPoint};
use crate::options::InputOptions;

/// A finger currently on the screen.
#[derive(Debug, Clone, Copy)]
struct ActiveTouch {
    id: u64,
    /// Latest reported position.
    position: Vec2,
    /// Position when the current frame began.
    frame_start: Vec2,
}

impl ActiveTouch {
    fn point(&self) -> TouchPoint {
        TouchPoint {
            position: self.position,
            delta: self.position - self.frame_start,
        }
    }
}

/// Converts raw input events into per-frame [`InputSnapshot`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(event) = InputEvent::from_window_event(&window_event) {
///     input_processor.handle_event(event);
/// }
///
/// // Once per frame:
/// controller.tick(dt, &input_processor.take_snapshot());
/// ```
pub struct InputProcessor {
    options: InputOptions,
    /// Last cursor position; `None` until the first move.
    cursor: Option<Vec2>,
    /// Cursor movement since the last snapshot, in physical pixels.
    cursor_delta: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Scroll accumulated since the last snapshot, already scaled.
    scroll: f32,
    /// Fingers on the screen, in the order they went down.
    touches: Vec<ActiveTouch>,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(InputOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor using the given unit scales.
    #[must_use]
    pub fn new(options: InputOptions) -> Self {
        Self {
            options,
            cursor: None,
            cursor_delta: Vec2::ZERO,
            mouse_pressed: false,
            scroll: 0.0,
            touches: Vec::new(),
        }
    }

    /// Replace the unit scales (e.g. after loading a preset).
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Number of fingers currently on the screen.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Record one event. Returns `true` if the event is relevant to the
    /// camera.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let position = Vec2::new(x, y);
                if let Some(last) = self.cursor {
                    self.cursor_delta += position - last;
                }
                self.cursor = Some(position);
                true
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.mouse_pressed = pressed;
                true
            }
            InputEvent::MouseButton { .. } => false,
            InputEvent::Scroll { delta } => {
                self.scroll += delta * self.options.line_scroll_scale;
                true
            }
            InputEvent::PixelScroll { delta } => {
                self.scroll += delta * self.options.pixel_scroll_scale;
                true
            }
            InputEvent::Touch { id, phase, x, y } => {
                self.handle_touch(id, phase, Vec2::new(x, y));
                true
            }
        }
    }

    fn handle_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        let existing = self.touches.iter().position(|t| t.id == id);
        match (phase, existing) {
            (TouchPhase::Started, None) => self.touches.push(ActiveTouch {
                id,
                position,
                frame_start: position,
            }),
            (TouchPhase::Started | TouchPhase::Moved, Some(i)) => {
                self.touches[i].position = position;
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(i)) => {
                let _ = self.touches.remove(i);
            }
            // Moves or ends for touches we never saw start
            (_, None) => {}
        }
    }

    /// Build the snapshot for the frame that is about to run and reset the
    /// per-frame accumulators.
    ///
    /// A single finger acts as the primary pointer. Two fingers produce a
    /// [`TouchPinch`] instead.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let (pointer_pressed, pixel_delta) = match self.touches.as_slice() {
            [only] => (true, only.point().delta),
            _ => (self.mouse_pressed, self.cursor_delta),
        };
        let pinch = match self.touches.as_slice() {
            [first, second] => Some(TouchPinch {
                first: first.point(),
                second: second.point(),
            }),
            _ => None,
        };

        let scale = self.options.pointer_scale;
        let snapshot = InputSnapshot {
            pointer_pressed,
            // Screen y grows downward; the controller wants y up
            pointer_delta: Vec2::new(pixel_delta.x, -pixel_delta.y) * scale,
            scroll_delta: self.scroll,
            pinch,
        };

        self.cursor_delta = Vec2::ZERO;
        self.scroll = 0.0;
        for touch in &mut self.touches {
            touch.frame_start = touch.position;
        }
        snapshot
    }
}
