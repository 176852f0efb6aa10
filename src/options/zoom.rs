use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ValueRange;

/// What a zoom gesture changes.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// Narrow or widen the camera's vertical field of view.
    #[default]
    FieldOfView,
    /// Move the camera along its orbit radius.
    OrbitRadius,
}

impl ZoomMode {
    /// Decode a UI selector index. `0` is field of view; every other value
    /// selects orbit radius.
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Self::FieldOfView
        } else {
            Self::OrbitRadius
        }
    }

    /// Selector index for this mode (inverse of [`ZoomMode::from_code`]).
    pub fn code(self) -> i32 {
        match self {
            Self::FieldOfView => 0,
            Self::OrbitRadius => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Zoom strategy, bounds and response.
pub struct ZoomOptions {
    /// Which value scroll input drives.
    #[schemars(title = "Zoom Mode")]
    pub mode: ZoomMode,
    /// Field-of-view bounds in degrees.
    #[schemars(title = "FOV Range")]
    pub fov_range: ValueRange,
    /// Orbit-radius bounds in world units.
    #[schemars(title = "Distance Range")]
    pub radius_range: ValueRange,
    /// Multiplier on frame time giving the smoothing time of a scroll step.
    #[schemars(title = "Zoom Smoothing", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub smoothing: f32,
    /// Field-of-view change per pixel of pinch movement.
    #[schemars(title = "Zoom Sensitivity", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub sensitivity: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            mode: ZoomMode::FieldOfView,
            fov_range: ValueRange::new(10.0, 60.0),
            radius_range: ValueRange::new(10.0, 60.0),
            smoothing: 10.0,
            sensitivity: 2.0,
        }
    }
}

impl ZoomOptions {
    /// Bounds of the value the current mode drives.
    pub fn active_range(&self) -> ValueRange {
        match self.mode {
            ZoomMode::FieldOfView => self.fov_range,
            ZoomMode::OrbitRadius => self.radius_range,
        }
    }

    pub(crate) fn active_range_mut(&mut self) -> &mut ValueRange {
        match self.mode {
            ZoomMode::FieldOfView => &mut self.fov_range,
            ZoomMode::OrbitRadius => &mut self.radius_range,
        }
    }
}
