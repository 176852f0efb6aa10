use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ValueRange;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Orbit rotation parameters: auto-rotation, manual drag response, pitch
/// limits and orbit radius.
pub struct RotationOptions {
    /// Keep adding yaw velocity every frame so the camera turns on its own.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Scale applied to the accumulated yaw when building the orientation.
    /// The accumulator itself never sees this factor.
    #[schemars(title = "Rotation Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub speed: f32,
    /// Displayed yaw (degrees) at initialization.
    #[schemars(skip)]
    pub start_angle: f32,
    /// Velocity decay rate. Higher values stop the camera sooner.
    #[schemars(title = "Rotation Smoothing", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub smoothing: f32,
    /// Velocity added per unit of pointer movement (and per second of
    /// auto-rotation).
    #[schemars(title = "Rotation Sensitivity", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub sensitivity: f32,
    /// Pitch bounds in degrees. `-360..360` leaves pitch unrestricted.
    #[schemars(title = "Pitch Limit")]
    pub pitch_limit: ValueRange,
    /// Distance from the target along the camera's back axis.
    #[schemars(title = "Camera Distance", range(min = 0.1, max = 100.0), extend("step" = 0.05))]
    pub orbit_radius: f32,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            speed: 0.1,
            start_angle: 180.0,
            smoothing: 2.0,
            sensitivity: 1.0,
            pitch_limit: ValueRange::new(5.0, 80.0),
            orbit_radius: 0.45,
        }
    }
}

impl RotationOptions {
    /// Accumulated yaw that displays as `start_angle` once scaled by
    /// `speed`.
    ///
    /// A zero speed has no such accumulator; the yaw then starts at zero.
    pub fn initial_yaw(&self) -> f32 {
        if self.speed == 0.0 {
            log::warn!("rotation speed is zero; starting yaw at 0");
            0.0
        } else {
            self.start_angle / self.speed
        }
    }
}
