// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Smooth orbit camera controller.
//!
//! Orbitcam turns per-frame pointer, scroll and pinch input into a camera
//! pose that circles a target point. Rotation is velocity based with
//! exponential damping, pitch is limited with a wrap-then-clamp rule, and
//! zoom either narrows the field of view or pulls the camera along its
//! orbit radius, smoothed toward the configured bounds.
//!
//! # Key entry points
//!
//! - [`camera::OrbitController`] - per-frame integration and pose output
//! - [`options::Options`] - tunables, typed setters, and TOML presets
//! - [`input::InputProcessor`] - folds raw events into one
//!   [`input::InputSnapshot`] per frame
//!
//! # Frame loop
//!
//! ```no_run
//! # use std::{cell::Cell, rc::Rc};
//! # use glam::Vec3;
//! # use orbitcam::{Camera, InputEvent, InputProcessor, OrbitController, Options};
//! let target = Rc::new(Cell::new(Vec3::ZERO));
//! let mut controller = OrbitController::new(Options::default(), Camera::default())
//!     .with_target(&target);
//! let mut input = InputProcessor::new(controller.options().input.clone());
//!
//! input.handle_event(InputEvent::Scroll { delta: 1.0 });
//! controller.tick(1.0 / 60.0, &input.take_snapshot());
//! let eye = controller.camera().position;
//! # let _ = eye;
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraState, OrbitController, TargetRef};
pub use error::OrbitError;
pub use input::{InputEvent, InputProcessor, InputSnapshot, MouseButton};
pub use options::{Options, ZoomMode};
