//! Shared utilities for the controller.
//!
//! Scalar damping and angle limiting, plus the frame clock that feeds
//! per-frame deltas to [`crate::camera::OrbitController::tick`].

pub mod damping;
pub mod frame_timing;
