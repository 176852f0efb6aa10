//! Scripted headless demo of the orbit camera controller.

use std::{cell::Cell, path::Path, rc::Rc, time::Duration};

use glam::Vec3;
use orbitcam::{
    util::frame_timing::FrameTiming, Camera, InputEvent, InputProcessor,
    MouseButton, OrbitController, Options,
};

/// Frames per scripted phase.
const PHASE_FRAMES: u32 = 60;

/// Scripted input for one frame of the demo session.
fn scripted_events(frame: u32) -> Vec<InputEvent> {
    let phase = frame / PHASE_FRAMES;
    let step = (frame % PHASE_FRAMES) as f32;
    match phase {
        // Drag to the right with the left button held
        1 => {
            let mut events = vec![InputEvent::CursorMoved {
                x: 400.0 + step * 4.0,
                y: 300.0,
            }];
            if step == 0.0 {
                events.push(InputEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: true,
                });
            }
            events
        }
        2 => vec![
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
            InputEvent::Scroll { delta: 1.0 },
        ],
        4 => vec![InputEvent::Scroll { delta: -1.0 }],
        _ => Vec::new(),
    }
}

fn load_options(arg: Option<String>) -> Options {
    let Some(path) = arg else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("Loaded options from '{path}'");
            options
        }
        Err(e) => {
            log::error!("Failed to load options '{path}': {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options(std::env::args().nth(1));
    let target = Rc::new(Cell::new(Vec3::ZERO));
    let mut input = InputProcessor::new(options.input.clone());
    let mut controller =
        OrbitController::new(options, Camera::default()).with_target(&target);
    let mut timing = FrameTiming::new(60);

    let total_frames = PHASE_FRAMES * 5;
    let mut frame = 0;
    while frame < total_frames {
        if !timing.should_render() {
            std::thread::sleep(Duration::from_millis(1));
            continue;
        }
        let dt = timing.begin_frame();

        if frame == PHASE_FRAMES * 3 {
            if let Err(e) = controller.options_mut().apply_setting("zoom.mode", "1")
            {
                log::error!("{e}");
            }
            if let Err(e) = controller.options_mut().set_camera_distance("35") {
                log::error!("{e}");
            }
        }
        for event in scripted_events(frame) {
            let _ = input.handle_event(event);
        }
        controller.tick(dt, &input.take_snapshot());

        if frame % 30 == 0 {
            let camera = controller.camera();
            let state = controller.state();
            log::info!(
                "frame {frame:>3} | {:>5.1} fps | eye {:>7.2} {:>7.2} {:>7.2} | pitch {:>5.1} | fov {:>5.1} | distance {:>5.2} | zoom {:>5.2}",
                timing.fps(),
                camera.position.x,
                camera.position.y,
                camera.position.z,
                state.pitch,
                camera.fovy,
                state.distance,
                state.zoom_value(controller.options().zoom.mode),
            );
        }
        frame += 1;
    }
}
