use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use glam::Vec3;

use super::core::Camera;
use super::state::CameraState;
use crate::input::InputSnapshot;
use crate::options::{Options, ZoomMode};
use crate::util::damping::{
    clamp_lenient, decay_toward_zero, smooth_damp, wrap_then_clamp,
};

/// Weak handle to the orbit centre. The caller owns the `Rc` and moves the
/// target by writing the cell.
pub type TargetRef = Weak<Cell<Vec3>>;

/// Orbit camera controller.
///
/// Owns the tunables, the integrated [`CameraState`] and the [`Camera`] it
/// writes. Each [`tick`](Self::tick) first runs the zoom update, then the
/// rotation update, which writes the final pose.
pub struct OrbitController {
    options: Options,
    state: CameraState,
    camera: Camera,
    target: Option<TargetRef>,
    /// `rotation.orbit_radius` as last copied into `state.distance`.
    applied_radius: f32,
}

impl OrbitController {
    /// Initialize from options and the camera being driven.
    ///
    /// The field-of-view accumulator starts at the camera's current FOV, the
    /// distance at `rotation.orbit_radius`, and the yaw so that it displays
    /// as `rotation.start_angle`. Without a target the controller only
    /// zooms.
    pub fn new(options: Options, camera: Camera) -> Self {
        let state = CameraState::new(
            options.rotation.initial_yaw(),
            camera.fovy,
            options.rotation.orbit_radius,
        );
        log::debug!(
            "orbit controller: fov {:.1}, distance {:.2}, zoom {:?} at {:.2}",
            state.fov,
            state.distance,
            options.zoom.mode,
            state.zoom_value(options.zoom.mode)
        );
        Self {
            applied_radius: options.rotation.orbit_radius,
            options,
            state,
            camera,
            target: None,
        }
    }

    /// Builder form of [`set_target`](Self::set_target).
    #[must_use]
    pub fn with_target(mut self, target: &Rc<Cell<Vec3>>) -> Self {
        self.set_target(target);
        self
    }

    /// Orbit around `target`. Only a weak reference is kept.
    pub fn set_target(&mut self, target: &Rc<Cell<Vec3>>) {
        log::debug!("orbit target set at {}", target.get());
        self.target = Some(Rc::downgrade(target));
    }

    /// Stop orbiting. Zoom keeps working.
    pub fn clear_target(&mut self) {
        log::debug!("orbit target cleared");
        self.target = None;
    }

    /// Current target position, if a target is set and still alive.
    pub fn target_position(&self) -> Option<Vec3> {
        self.target
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|cell| cell.get())
    }

    /// Current tunables.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable tunables, for UI setters. Changes apply on the next tick.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Replace all tunables (e.g. after loading a preset). The preset's
    /// orbit radius is adopted on the next tick.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.options.radius_written = true;
    }

    /// Integrated state.
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// The driven camera, as written by the last tick.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Update the projection aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Advance one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: &InputSnapshot) {
        self.adopt_orbit_radius();
        self.update_zoom(dt, input);
        self.update_rotation(dt, input);
    }

    /// Pick up an orbit radius set through the options since the last frame.
    /// A setter call counts even when it repeats the previous value.
    fn adopt_orbit_radius(&mut self) {
        let radius = self.options.rotation.orbit_radius;
        let written = self.options.take_radius_write();
        if written || radius != self.applied_radius {
            log::debug!("orbit radius {} -> {radius}", self.state.distance);
            self.state.distance = radius;
            self.state.distance_velocity = 0.0;
            self.applied_radius = radius;
        }
    }

    fn update_zoom(&mut self, dt: f32, input: &InputSnapshot) {
        let zoom = &self.options.zoom;
        let state = &mut self.state;

        // Pinch goes straight to the FOV accumulator in either zoom mode.
        if let Some(pinch) = input.pinch {
            let fov = state.fov + pinch.separation_change() * zoom.sensitivity;
            state.fov = clamp_lenient(fov, zoom.fov_range.min, zoom.fov_range.max);
            self.camera.fovy = state.fov;
        }

        let zoom_in = if input.scroll_delta > 0.0 {
            true
        } else if input.scroll_delta < 0.0 {
            false
        } else {
            return;
        };

        let range = zoom.active_range();
        let goal = if zoom_in { range.min } else { range.max };
        let (value, velocity) = match zoom.mode {
            ZoomMode::FieldOfView => (&mut state.fov, &mut state.fov_velocity),
            ZoomMode::OrbitRadius => {
                (&mut state.distance, &mut state.distance_velocity)
            }
        };
        let next = smooth_damp(*value, goal, velocity, dt * zoom.smoothing, dt);
        *value = if (zoom_in && next <= goal) || (!zoom_in && next >= goal) {
            goal
        } else {
            next
        };

        // In radius mode the distance reaches the camera through the
        // rotation update instead.
        if zoom.mode == ZoomMode::FieldOfView {
            self.camera.fovy = state.fov;
        }
    }

    fn update_rotation(&mut self, dt: f32, input: &InputSnapshot) {
        let Some(target) = self.target_position() else {
            return;
        };
        let rotation = &self.options.rotation;
        let state = &mut self.state;

        if rotation.auto_rotate {
            state.yaw_velocity += rotation.sensitivity * dt;
        }
        // Deltas only count while pressed, so hovering never turns the camera
        if input.pointer_pressed {
            state.yaw_velocity += input.pointer_delta.x * rotation.sensitivity;
            state.pitch_velocity -= input.pointer_delta.y * rotation.sensitivity;
        }

        state.yaw += state.yaw_velocity;
        state.pitch += state.pitch_velocity;
        state.pitch = wrap_then_clamp(
            state.pitch,
            rotation.pitch_limit.min,
            rotation.pitch_limit.max,
        );

        let orientation = state.orientation(rotation.speed);
        self.camera.rotation = orientation;
        self.camera.position =
            orientation * Vec3::new(0.0, 0.0, -state.distance) + target;

        state.yaw_velocity =
            decay_toward_zero(state.yaw_velocity, dt, rotation.smoothing);
        state.pitch_velocity =
            decay_toward_zero(state.pitch_velocity, dt, rotation.smoothing);

        log::trace!(
            "orbit pose: yaw {:.2} pitch {:.2} eye {}",
            state.yaw * rotation.speed,
            state.pitch,
            self.camera.position
        );
    }
}
