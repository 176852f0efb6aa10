//! Scalar smoothing and angle limiting for the orbit controller.
//!
//! All functions are pure and cheap; the controller calls each of them a
//! handful of times per frame.

use glam::FloatExt;

/// Smallest smoothing time accepted by [`smooth_damp`], in seconds.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Clamp `value` into `[min, max]` without requiring `min <= max`.
///
/// A value below `min` becomes `min`; otherwise a value above `max`
/// becomes `max`. With an inverted pair the result is therefore always one
/// of the bounds, never a panic.
#[inline]
pub fn clamp_lenient(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Fold `angle` back by one turn if it left `[-360, 360]`, then clamp it
/// into `[min, max]`.
///
/// The wrap must come first: with limits of `-360..360` the clamp is then
/// a no-op and the angle can keep turning forever.
#[inline]
pub fn wrap_then_clamp(angle: f32, min: f32, max: f32) -> f32 {
    let mut angle = angle;
    if angle < -360.0 {
        angle += 360.0;
    }
    if angle > 360.0 {
        angle -= 360.0;
    }
    clamp_lenient(angle, min, max)
}

/// One frame of exponential decay toward zero.
///
/// Interpolates `velocity` toward rest by `dt * smoothing`, clamped to
/// `[0, 1]`. Non-positive smoothing leaves the velocity as is.
#[inline]
pub fn decay_toward_zero(velocity: f32, dt: f32, smoothing: f32) -> f32 {
    FloatExt::lerp(velocity, 0.0, (dt * smoothing).clamp(0.0, 1.0))
}

/// Critically damped step of `current` toward `target`.
///
/// `velocity` carries the filter state between calls. `smooth_time` is the
/// approximate time to reach the target. The result never passes the
/// target; on arrival the velocity is reset.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Pade-style approximation of exp(-x)
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }
    output
}
