//! Input handling: platform-agnostic events, the per-frame snapshot the
//! controller consumes, and the processor that folds one into the other.

/// Platform-agnostic input events.
pub mod event;
/// Folds a frame's worth of events into an [`InputSnapshot`].
pub mod processor;
/// Per-frame input value objects.
pub mod snapshot;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use processor::InputProcessor;
pub use snapshot::{InputSnapshot, TouchPinch, TouchPoint};
