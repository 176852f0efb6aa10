/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds everything that happened during a frame into one
/// [`InputSnapshot`](super::InputSnapshot).
///
/// # Example
///
/// ```
/// # use orbitcam::input::{InputEvent, InputProcessor, MouseButton};
/// let mut input = InputProcessor::default();
/// let _ = input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// let _ = input.handle_event(InputEvent::Scroll { delta: -1.0 });
/// let snapshot = input.take_snapshot();
/// assert!(snapshot.pointer_pressed);
/// assert!(snapshot.scroll_delta < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Wheel scroll in lines (positive = zoom in).
    Scroll {
        /// Lines scrolled; positive away from the user.
        delta: f32,
    },
    /// Trackpad scroll in pixels (positive = zoom in).
    PixelScroll {
        /// Pixels scrolled; positive away from the user.
        delta: f32,
    },
    /// A finger touched, moved on, or left the screen.
    Touch {
        /// Platform touch identifier, stable for the touch's lifetime.
        id: u64,
        /// Lifecycle stage of this touch.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Lifecycle stage of a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger went down.
    Started,
    /// Finger moved.
    Moved,
    /// Finger lifted.
    Ended,
    /// The platform cancelled the touch.
    Cancelled,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it carries camera input.
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(match delta {
                MouseScrollDelta::LineDelta(_, y) => Self::Scroll { delta: *y },
                MouseScrollDelta::PixelDelta(pos) => Self::PixelScroll {
                    delta: pos.y as f32,
                },
            }),
            WindowEvent::Touch(touch) => Some(Self::Touch {
                id: touch.id,
                phase: touch.phase.into(),
                x: touch.location.x as f32,
                y: touch.location.y as f32,
            }),
            _ => None,
        }
    }
}
