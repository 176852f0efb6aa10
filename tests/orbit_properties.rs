//! End-to-end behavior of the orbit controller driven through its public
//! API: pitch limiting, velocity damping, bounded zoom, and option setters.

use std::{cell::Cell, rc::Rc};

use glam::{Vec2, Vec3};
use orbitcam::options::ValueRange;
use orbitcam::{
    Camera, InputEvent, InputProcessor, InputSnapshot, MouseButton,
    OrbitController, OrbitError, Options, ZoomMode,
};

const DT: f32 = 1.0 / 60.0;

fn orbiting(options: Options) -> (OrbitController, Rc<Cell<Vec3>>) {
    let target = Rc::new(Cell::new(Vec3::new(0.0, 1.0, 0.0)));
    let controller =
        OrbitController::new(options, Camera::default()).with_target(&target);
    (controller, target)
}

fn manual_options() -> Options {
    let mut options = Options::default();
    options.rotation.auto_rotate = false;
    options
}

fn drag(dx: f32, dy: f32) -> InputSnapshot {
    InputSnapshot {
        pointer_pressed: true,
        pointer_delta: Vec2::new(dx, dy),
        ..InputSnapshot::default()
    }
}

fn scroll(delta: f32) -> InputSnapshot {
    InputSnapshot {
        scroll_delta: delta,
        ..InputSnapshot::default()
    }
}

#[test]
fn unrestricted_pitch_keeps_turning() {
    let mut options = manual_options();
    options.rotation.pitch_limit = ValueRange::new(-360.0, 360.0);
    options.rotation.smoothing = 0.0;
    let (mut controller, _target) = orbiting(options);

    // One downward flick gives a constant 7 degrees per frame forever
    controller.tick(DT, &drag(0.0, -7.0));
    for frame in 2..=1000_u32 {
        controller.tick(DT, &InputSnapshot::default());
        let pitch = controller.state().pitch;
        let unconstrained = 7.0 * frame as f32;
        let offset = (pitch - unconstrained).rem_euclid(360.0);
        assert!(
            offset < 1e-2 || offset > 360.0 - 1e-2,
            "frame {frame}: pitch {pitch} drifted from {unconstrained}"
        );
        assert!((-360.0..=360.0).contains(&pitch));
    }
}

#[test]
fn limited_pitch_stays_in_bounds() {
    let mut options = manual_options();
    options.rotation.pitch_limit = ValueRange::new(5.0, 80.0);
    let (mut controller, _target) = orbiting(options);

    let flicks = [-900.0, 35.0, 2000.0, -4.0, 0.5, -12345.0];
    for (i, dy) in flicks.iter().cycle().take(300).enumerate() {
        let input = if i % 3 == 0 {
            drag(0.0, *dy)
        } else {
            InputSnapshot::default()
        };
        controller.tick(DT, &input);
        let pitch = controller.state().pitch;
        assert!((5.0..=80.0).contains(&pitch), "pitch {pitch} after {i}");
    }
}

#[test]
fn released_rotation_coasts_to_a_stop() {
    let (mut controller, _target) = orbiting(manual_options());
    controller.tick(DT, &drag(3.0, 1.0));

    let mut last = controller.state().yaw_velocity.abs();
    for _ in 0..600 {
        controller.tick(DT, &InputSnapshot::default());
        let speed = controller.state().yaw_velocity.abs();
        assert!(speed <= last);
        last = speed;
    }
    assert!(last < 1e-3);
}

#[test]
fn camera_keeps_its_distance_from_the_target() {
    let mut options = Options::default();
    options.rotation.orbit_radius = 6.0;
    let (mut controller, target) = orbiting(options);
    for i in 0..120 {
        controller.tick(DT, &drag((i % 7) as f32, -((i % 5) as f32)));
        let camera = controller.camera();
        let offset = camera.position - target.get();
        assert!((offset.length() - 6.0).abs() < 1e-3);
        // The camera looks at the target
        assert!(camera.forward().dot(-offset.normalize()) > 0.9999);
    }
}

#[test]
fn scroll_in_on_fov_converges_to_minimum() {
    let camera = Camera {
        fovy: 60.0,
        ..Camera::default()
    };
    let mut controller = OrbitController::new(Options::default(), camera);
    assert_eq!(controller.options().zoom.fov_range, ValueRange::new(10.0, 60.0));

    let mut last = 60.0;
    for _ in 0..600 {
        controller.tick(DT, &scroll(1.0));
        let fov = controller.camera().fovy;
        assert!(fov >= 10.0);
        assert!(fov <= last);
        last = fov;
    }
    assert!((last - 10.0).abs() < 1e-3);
    assert_eq!(controller.state().fov, last);
}

#[test]
fn scroll_out_on_radius_converges_to_maximum() {
    let mut options = manual_options();
    options.zoom.mode = ZoomMode::OrbitRadius;
    options.zoom.radius_range = ValueRange::new(10.0, 60.0);
    options.rotation.orbit_radius = 10.0;
    let (mut controller, target) = orbiting(options);

    let mut last = 10.0;
    for _ in 0..600 {
        controller.tick(DT, &scroll(-1.0));
        let distance = controller.state().distance;
        assert!(distance <= 60.0);
        assert!(distance >= last);
        last = distance;
    }
    assert!((last - 60.0).abs() < 1e-3);
    let eye = controller.camera().position;
    assert!(((eye - target.get()).length() - last).abs() < 1e-3);
    // Field of view untouched in radius mode
    assert_eq!(controller.camera().fovy, 60.0);
}

#[test]
fn idle_scroll_changes_nothing() {
    let mut controller =
        OrbitController::new(Options::default(), Camera::default());
    for _ in 0..10 {
        controller.tick(DT, &scroll(0.0));
    }
    assert_eq!(controller.state().fov, 60.0);
    assert_eq!(controller.state().fov_velocity, 0.0);
}

#[test]
fn switching_zoom_mode_preserves_inactive_value() {
    let (mut controller, _target) = orbiting(manual_options());

    controller.options_mut().set_zoom_mode(1);
    controller.options_mut().set_camera_distance("40").unwrap();
    controller.tick(DT, &InputSnapshot::default());
    assert_eq!(controller.state().distance, 40.0);

    controller.options_mut().set_zoom_mode(0);
    for _ in 0..30 {
        controller.tick(DT, &scroll(1.0));
    }
    assert!(controller.state().fov < 60.0);
    assert_eq!(controller.state().distance, 40.0);

    let fov = controller.state().fov;
    controller.options_mut().set_zoom_mode(1);
    controller.tick(DT, &InputSnapshot::default());
    assert_eq!(controller.state().distance, 40.0);
    assert_eq!(controller.state().fov, fov);
}

#[test]
fn zoom_range_setter_routes_by_mode() {
    let mut options = Options::default();
    options.set_zoom_range_x("15").unwrap();
    assert_eq!(options.zoom.fov_range.min, 15.0);
    assert_eq!(options.zoom.radius_range, ValueRange::new(10.0, 60.0));

    options.set_zoom_mode(3);
    options.set_zoom_range_x("15").unwrap();
    assert_eq!(options.zoom.radius_range.min, 15.0);
}

#[test]
fn malformed_rotation_speed_is_rejected() {
    let (mut controller, _target) = orbiting(Options::default());
    let err = controller
        .options_mut()
        .set_rotation_speed("abc")
        .unwrap_err();
    assert!(matches!(err, OrbitError::Parse { .. }));
    assert!(err.to_string().contains("rotation.speed"));
    assert_eq!(controller.options().rotation.speed, 0.1);
}

#[test]
fn inverted_fov_range_clamps_without_panicking() {
    let mut options = manual_options();
    options.zoom.fov_range = ValueRange::new(50.0, 20.0);
    let mut controller = OrbitController::new(options, Camera::default());
    for delta in [1.0, -1.0, 1.0] {
        for _ in 0..30 {
            controller.tick(DT, &scroll(delta));
            assert!(controller.camera().fovy.is_finite());
        }
    }
}

#[test]
fn processor_feeds_controller() {
    let (mut controller, _target) = orbiting(manual_options());
    let mut input = InputProcessor::new(controller.options().input.clone());

    let _ = input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
    let _ = input.handle_event(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    });
    let _ = input.handle_event(InputEvent::CursorMoved { x: 150.0, y: 100.0 });
    controller.tick(DT, &input.take_snapshot());

    // 50 px at the default pointer scale of 0.1
    assert!(controller.state().yaw_velocity > 4.0);
    let yaw_before = controller.state().yaw;

    let _ = input.handle_event(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    });
    let _ = input.handle_event(InputEvent::CursorMoved { x: 500.0, y: 100.0 });
    controller.tick(DT, &input.take_snapshot());
    // Only the coasting velocity moved the camera, not the hover
    assert!(controller.state().yaw - yaw_before < 5.0);
}
