use crate::camera::Camera;
use cityscape_input::FrameActions;
use cityscape_render::{FrameSubmission, Projection};
use glam::{Mat4, Vec3};

/// Angular rate of the scene's spin about +Y.
pub const MODEL_SPIN_DEGREES_PER_SECOND: f32 = 50.0;

/// Model transform after `elapsed` seconds of continuous spin.
pub fn model_matrix(elapsed: f32) -> Mat4 {
    Mat4::from_rotation_y((elapsed * MODEL_SPIN_DEGREES_PER_SECOND).to_radians())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// Per-frame orchestration: clock, camera impulses, light flag, submission.
///
/// The loop owns the camera and the light flag. The caller owns the clock and
/// passes the current time, in seconds since startup, to [`FrameLoop::step`].
#[derive(Debug, Clone)]
pub struct FrameLoop {
    camera: Camera,
    projection: Mat4,
    light_on: bool,
    last_frame: f32,
    state: LoopState,
}

impl FrameLoop {
    pub fn new(camera: Camera, projection: Projection) -> Self {
        Self {
            camera,
            projection: projection.matrix(),
            light_on: true,
            last_frame: 0.0,
            state: LoopState::Running,
        }
    }

    /// Camera at (0, 0, 5) looking down -Z with the default projection.
    pub fn with_default_scene() -> Self {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y, -90.0, 0.0);
        Self::new(camera, Projection::default())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn toggle_light(&mut self) {
        self.light_on = !self.light_on;
        tracing::debug!("light {}", if self.light_on { "on" } else { "off" });
    }

    /// The window system asked to close.
    pub fn request_close(&mut self) {
        if self.state == LoopState::Running {
            tracing::info!("close requested");
            self.state = LoopState::Terminating;
        }
    }

    /// Advance one frame to time `now` and build its submission.
    ///
    /// Returns `None` once the loop is terminating; the caller should stop
    /// drawing and exit.
    pub fn step(&mut self, now: f32, actions: &FrameActions) -> Option<FrameSubmission> {
        if self.state == LoopState::Terminating {
            return None;
        }

        let dt = now - self.last_frame;
        self.last_frame = now;

        if actions.quit {
            tracing::info!("quit key pressed");
            self.state = LoopState::Terminating;
            return None;
        }

        for &direction in &actions.moves {
            self.camera.move_in(direction, dt);
        }

        if actions.toggle_light {
            self.toggle_light();
        }

        Some(FrameSubmission {
            model: model_matrix(now),
            view: self.camera.view_matrix(),
            projection: self.projection,
            light_on: self.light_on,
        })
    }
}
