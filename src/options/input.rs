use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Conversion factors from raw device units to controller axis units.
pub struct InputOptions {
    /// Axis units per physical pixel of cursor or touch movement.
    #[schemars(title = "Pointer Scale", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub pointer_scale: f32,
    /// Scroll units per wheel line.
    #[schemars(skip)]
    pub line_scroll_scale: f32,
    /// Scroll units per pixel of trackpad scroll.
    #[schemars(skip)]
    pub pixel_scroll_scale: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            pointer_scale: 0.1,
            line_scroll_scale: 0.1,
            pixel_scroll_scale: 0.01,
        }
    }
}
