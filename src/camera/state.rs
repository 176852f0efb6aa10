use glam::{EulerRot, Quat};

use crate::options::ZoomMode;

/// Integrated orbit state, advanced once per frame by the controller.
///
/// Angles are degrees. `yaw` accumulates without bound; `pitch` is kept
/// inside the configured limits. Both zoom values are kept regardless of
/// the active zoom mode, so switching modes never loses either one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    /// Accumulated yaw, before the rotation-speed scale.
    pub yaw: f32,
    /// Pitch after wrap-then-clamp.
    pub pitch: f32,
    /// Yaw added per frame, decaying toward zero.
    pub yaw_velocity: f32,
    /// Pitch added per frame, decaying toward zero.
    pub pitch_velocity: f32,
    /// Field-of-view accumulator in degrees.
    pub fov: f32,
    /// Orbit distance from the target.
    pub distance: f32,
    /// Smoothing-filter velocity for `fov`.
    pub fov_velocity: f32,
    /// Smoothing-filter velocity for `distance`.
    pub distance_velocity: f32,
}

impl CameraState {
    /// Fresh state at rest.
    pub fn new(yaw: f32, fov: f32, distance: f32) -> Self {
        Self {
            yaw,
            fov,
            distance,
            ..Self::default()
        }
    }

    /// Orientation for the current angles: pitch about X, then the scaled
    /// yaw about Y, no roll.
    pub fn orientation(&self, rotation_speed: f32) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            (self.yaw * rotation_speed).to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// The zoom value driven by `mode`.
    pub fn zoom_value(&self, mode: ZoomMode) -> f32 {
        match mode {
            ZoomMode::FieldOfView => self.fov,
            ZoomMode::OrbitRadius => self.distance,
        }
    }

    /// Whether either rotation axis is still moving.
    pub fn is_rotating(&self) -> bool {
        self.yaw_velocity != 0.0 || self.pitch_velocity != 0.0
    }
}
