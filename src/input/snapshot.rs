use glam::Vec2;

/// Everything the controller needs to know about input for one frame.
///
/// Captured once per frame, after event handling and before
/// [`OrbitController::tick`](crate::camera::OrbitController::tick).
/// Callers with their own input stack can build one directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    /// Primary mouse button held, or exactly one finger on the screen.
    pub pointer_pressed: bool,
    /// Pointer movement this frame in axis units, y up.
    pub pointer_delta: Vec2,
    /// Signed scroll amount this frame (positive = zoom in). Only the sign
    /// is used.
    pub scroll_delta: f32,
    /// Present when exactly two fingers are on the screen.
    pub pinch: Option<TouchPinch>,
}

/// One finger's state for the current frame, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    /// Position at the end of the frame.
    pub position: Vec2,
    /// Movement during the frame.
    pub delta: Vec2,
}

impl TouchPoint {
    /// Position at the start of the frame.
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// Two simultaneous touches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPinch {
    /// First touch, in platform order.
    pub first: TouchPoint,
    /// Second touch, in platform order.
    pub second: TouchPoint,
}

impl TouchPinch {
    /// How much the fingers closed in this frame: previous separation minus
    /// current separation. Positive when pinching in, negative when
    /// spreading apart.
    pub fn separation_change(&self) -> f32 {
        let previous = self
            .first
            .previous_position()
            .distance(self.second.previous_position());
        let current = self.first.position.distance(self.second.position);
        previous - current
    }
}
