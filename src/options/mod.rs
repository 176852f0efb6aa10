//! Orbit camera tunables with TOML preset support.
//!
//! Every parameter the controller reads each frame lives here: rotation
//! response, pitch limits, orbit radius, zoom strategy and bounds, and the
//! device-unit scales used by the input processor. Options serialize to and
//! from TOML so a tuned camera can be saved as a preset, and the typed
//! setters in [`setters`] let a UI write individual fields from text input.

mod input;
mod rotation;
pub mod setters;
mod zoom;

use std::path::Path;

pub use input::InputOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::{ZoomMode, ZoomOptions};

use crate::error::OrbitError;

/// A `(min, max)` pair.
///
/// `min <= max` is expected but never enforced; an inverted pair is kept
/// as written and yields degenerate clamping.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
pub struct ValueRange {
    /// Lower bound (the "x" component in UI terms).
    pub min: f32,
    /// Upper bound (the "y" component in UI terms).
    pub max: f32,
}

impl ValueRange {
    /// Create a range from its bounds.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Rotation response, pitch limits and orbit radius.
    pub rotation: RotationOptions,
    /// Zoom mode, bounds and response.
    pub zoom: ZoomOptions,
    /// Raw input scaling.
    pub input: InputOptions,
    /// Set by [`Options::set_camera_distance`] until the controller adopts
    /// the radius.
    #[serde(skip)]
    #[schemars(skip)]
    pub(crate) radius_written: bool,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[zoom]
mode = "orbit_radius"
radius_range = { min = 2.0, max = 8.0 }
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.zoom.mode, ZoomMode::OrbitRadius);
        assert_eq!(opts.zoom.radius_range, ValueRange::new(2.0, 8.0));
        // Everything else should be default
        assert_eq!(opts.zoom.fov_range, ValueRange::new(10.0, 60.0));
        assert_eq!(opts.rotation.smoothing, 2.0);
        assert!(opts.rotation.auto_rotate);
    }

    #[test]
    fn defaults_match_documented_values() {
        let opts = Options::default();
        assert_eq!(opts.rotation.speed, 0.1);
        assert_eq!(opts.rotation.start_angle, 180.0);
        assert_eq!(opts.rotation.sensitivity, 1.0);
        assert_eq!(opts.rotation.pitch_limit, ValueRange::new(5.0, 80.0));
        assert_eq!(opts.rotation.orbit_radius, 0.45);
        assert_eq!(opts.zoom.mode, ZoomMode::FieldOfView);
        assert_eq!(opts.zoom.smoothing, 10.0);
        assert_eq!(opts.zoom.sensitivity, 2.0);
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("orbitcam-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.zoom.mode = ZoomMode::OrbitRadius;
        opts.rotation.pitch_limit = ValueRange::new(-360.0, 360.0);

        opts.save(&dir.join("turntable.toml")).unwrap();
        let loaded = Options::load(&dir.join("turntable.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["turntable".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_malformed_toml() {
        let path = std::env::temp_dir()
            .join(format!("orbitcam-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[rotation]\nspeed = \"fast\"\n").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, OrbitError::OptionsParse(_)));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("rotation"));
        assert!(props.contains_key("zoom"));
        assert!(props.contains_key("input"));

        // Exposed fields present, skipped ones absent
        let rotation = &props["rotation"]["properties"];
        assert!(rotation.get("speed").is_some());
        assert!(rotation.get("pitch_limit").is_some());
        assert!(rotation.get("start_angle").is_none());
        let input = &props["input"]["properties"];
        assert!(input.get("pointer_scale").is_some());
        assert!(input.get("line_scroll_scale").is_none());
    }
}
