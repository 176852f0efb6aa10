//! Typed setters for UI-driven option changes.
//!
//! Each setter writes exactly one field. Numeric setters take the raw text
//! of an input box and fail with [`OrbitError::Parse`] when it is not a
//! decimal number, leaving the field untouched. No bounds are checked.
//!
//! The zoom-range setters are routed by the zoom mode selected at call
//! time: in field-of-view mode they write `zoom.fov_range`, otherwise
//! `zoom.radius_range`.

use super::{Options, ZoomMode};
use crate::error::OrbitError;

/// Parse decimal text as an `f32`, tolerating surrounding whitespace.
pub fn parse_value(setting: &'static str, text: &str) -> Result<f32, OrbitError> {
    text.trim()
        .parse::<f32>()
        .map_err(|source| OrbitError::Parse {
            setting,
            input: text.to_owned(),
            source,
        })
}

fn write_parsed(
    setting: &'static str,
    text: &str,
    slot: &mut f32,
) -> Result<(), OrbitError> {
    let value = parse_value(setting, text)?;
    *slot = value;
    log::debug!("{setting} = {value}");
    Ok(())
}

impl Options {
    /// Enable or disable auto-rotation.
    pub fn toggle_auto_rotate(&mut self, on: bool) {
        self.rotation.auto_rotate = on;
        log::debug!("rotation.auto_rotate = {on}");
    }

    /// Set the displayed-yaw scale.
    pub fn set_rotation_speed(&mut self, text: &str) -> Result<(), OrbitError> {
        write_parsed("rotation.speed", text, &mut self.rotation.speed)
    }

    /// Set the rotation velocity decay rate.
    pub fn set_rotation_smoothing(
        &mut self,
        text: &str,
    ) -> Result<(), OrbitError> {
        write_parsed("rotation.smoothing", text, &mut self.rotation.smoothing)
    }

    /// Set the drag and auto-rotation sensitivity.
    pub fn set_rotation_sensitivity(
        &mut self,
        text: &str,
    ) -> Result<(), OrbitError> {
        write_parsed(
            "rotation.sensitivity",
            text,
            &mut self.rotation.sensitivity,
        )
    }

    /// Set the orbit radius. The controller adopts it on its next tick,
    /// even when the text repeats the current value.
    pub fn set_camera_distance(&mut self, text: &str) -> Result<(), OrbitError> {
        write_parsed(
            "rotation.orbit_radius",
            text,
            &mut self.rotation.orbit_radius,
        )?;
        self.radius_written = true;
        Ok(())
    }

    /// Whether the orbit radius was set since the last call. Clears the flag.
    pub(crate) fn take_radius_write(&mut self) -> bool {
        std::mem::take(&mut self.radius_written)
    }

    /// Set the zoom smoothing multiplier.
    pub fn set_zoom_smoothing(&mut self, text: &str) -> Result<(), OrbitError> {
        write_parsed("zoom.smoothing", text, &mut self.zoom.smoothing)
    }

    /// Set the pinch zoom sensitivity.
    pub fn set_zoom_sensitivity(
        &mut self,
        text: &str,
    ) -> Result<(), OrbitError> {
        write_parsed("zoom.sensitivity", text, &mut self.zoom.sensitivity)
    }

    /// Select the zoom mode from a UI selector index (see
    /// [`ZoomMode::from_code`]).
    pub fn set_zoom_mode(&mut self, code: i32) {
        self.zoom.mode = ZoomMode::from_code(code);
        log::debug!("zoom.mode = {:?}", self.zoom.mode);
    }

    /// Set the lower bound of the active zoom range.
    pub fn set_zoom_range_x(&mut self, text: &str) -> Result<(), OrbitError> {
        let setting = match self.zoom.mode {
            ZoomMode::FieldOfView => "zoom.fov_range.min",
            ZoomMode::OrbitRadius => "zoom.radius_range.min",
        };
        write_parsed(setting, text, &mut self.zoom.active_range_mut().min)
    }

    /// Set the upper bound of the active zoom range.
    pub fn set_zoom_range_y(&mut self, text: &str) -> Result<(), OrbitError> {
        let setting = match self.zoom.mode {
            ZoomMode::FieldOfView => "zoom.fov_range.max",
            ZoomMode::OrbitRadius => "zoom.radius_range.max",
        };
        write_parsed(setting, text, &mut self.zoom.active_range_mut().max)
    }

    /// Set the lower pitch limit in degrees.
    pub fn set_rotation_limit_x(
        &mut self,
        text: &str,
    ) -> Result<(), OrbitError> {
        write_parsed(
            "rotation.pitch_limit.min",
            text,
            &mut self.rotation.pitch_limit.min,
        )
    }

    /// Set the upper pitch limit in degrees.
    pub fn set_rotation_limit_y(
        &mut self,
        text: &str,
    ) -> Result<(), OrbitError> {
        write_parsed(
            "rotation.pitch_limit.max",
            text,
            &mut self.rotation.pitch_limit.max,
        )
    }

    /// Apply a setting addressed by key, for string-based UI bridges.
    ///
    /// Keys mirror the TOML layout (`"rotation.speed"`, `"zoom.mode"`,
    /// ...). `zoom.range_min`/`zoom.range_max` follow the active zoom mode.
    /// `zoom.mode` accepts a selector index or a mode name.
    pub fn apply_setting(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), OrbitError> {
        match key {
            "rotation.auto_rotate" => {
                let on = value.trim().parse::<bool>().map_err(|_| {
                    OrbitError::InvalidValue {
                        setting: "rotation.auto_rotate",
                        input: value.to_owned(),
                    }
                })?;
                self.toggle_auto_rotate(on);
                Ok(())
            }
            "rotation.speed" => self.set_rotation_speed(value),
            "rotation.smoothing" => self.set_rotation_smoothing(value),
            "rotation.sensitivity" => self.set_rotation_sensitivity(value),
            "rotation.orbit_radius" => self.set_camera_distance(value),
            "rotation.limit_min" => self.set_rotation_limit_x(value),
            "rotation.limit_max" => self.set_rotation_limit_y(value),
            "zoom.mode" => {
                let code = match value.trim() {
                    "field_of_view" => ZoomMode::FieldOfView.code(),
                    "orbit_radius" => ZoomMode::OrbitRadius.code(),
                    other => other.parse::<i32>().map_err(|_| {
                        OrbitError::InvalidValue {
                            setting: "zoom.mode",
                            input: value.to_owned(),
                        }
                    })?,
                };
                self.set_zoom_mode(code);
                Ok(())
            }
            "zoom.smoothing" => self.set_zoom_smoothing(value),
            "zoom.sensitivity" => self.set_zoom_sensitivity(value),
            "zoom.range_min" => self.set_zoom_range_x(value),
            "zoom.range_max" => self.set_zoom_range_y(value),
            _ => {
                log::debug!("Unhandled setting: {key}");
                Err(OrbitError::UnknownSetting(key.to_owned()))
            }
        }
    }
}
