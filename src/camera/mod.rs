//! Orbit camera: the driven camera, its integrated state, and the
//! controller that advances both each frame.

/// Orbit controller: per-frame zoom and rotation integration.
pub mod controller;
/// Camera pose and projection.
pub mod core;
/// Integrated angles, velocities and zoom values.
pub mod state;

pub use self::core::Camera;
pub use controller::{OrbitController, TargetRef};
pub use state::CameraState;
