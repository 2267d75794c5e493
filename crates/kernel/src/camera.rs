use cityscape_common::MoveDirection;
use glam::{Mat4, Vec3};

pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Free-fly camera driven by discrete keyboard impulses.
///
/// Orientation is stored as yaw and pitch in degrees and is fixed after
/// construction; only the position moves. The basis is derived once from
/// yaw, pitch and world-up.
///
/// A pitch of ±90° makes `front` parallel to world-up. The cross product that
/// produces `right` then degenerates and the basis contains NaN. That case is
/// not guarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    /// Units per second.
    pub speed: f32,
    /// Degrees per pointer unit. Carried for completeness; nothing turns the camera.
    pub sensitivity: f32,
    /// Field of view in degrees. Carried for completeness; the projection is fixed.
    pub zoom: f32,
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_basis();
        camera
    }

    fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Translate by `speed * dt` along the basis vector for `direction`.
    pub fn move_in(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.speed * dt;
        let step = match direction {
            MoveDirection::Forward => self.front,
            MoveDirection::Backward => -self.front,
            MoveDirection::Right => self.right,
            MoveDirection::Left => -self.right,
            MoveDirection::Up => self.up,
            MoveDirection::Down => -self.up,
        };
        self.position += step * velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn start_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y, -90.0, 0.0)
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let cam = start_camera();
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(cam.speed, 2.5);
        assert_eq!(cam.zoom, 45.0);
    }

    #[test]
    fn basis_is_orthonormal() {
        for (yaw, pitch) in [(-90.0, 0.0), (0.0, 30.0), (37.0, -61.0), (200.0, 89.0), (-450.0, -12.5)] {
            let cam = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
            let (f, r, u) = (cam.front(), cam.right(), cam.up());
            for v in [f, r, u] {
                assert!((v.length() - 1.0).abs() < 1e-4, "yaw={yaw} pitch={pitch}");
            }
            assert!(f.dot(r).abs() < 1e-4);
            assert!(f.dot(u).abs() < 1e-4);
            assert!(r.dot(u).abs() < 1e-4);
            // Right-handed: right x up points backwards
            assert!(r.cross(u).abs_diff_eq(-f, 1e-4));
        }
    }

    #[test]
    fn view_maps_position_to_origin() {
        let cam = Camera::new(Vec3::new(3.0, -2.0, 7.5), Vec3::Y, 25.0, 10.0);
        let view = cam.view_matrix();
        assert!(view.transform_point3(cam.position).abs_diff_eq(Vec3::ZERO, 1e-4));

        let ahead = view.transform_point3(cam.position + cam.front());
        assert!(ahead.x.abs() < 1e-4);
        assert!(ahead.y.abs() < 1e-4);
        assert!((ahead.z + 1.0).abs() < 1e-4);
    }

    #[test]
    fn forward_one_second() {
        let mut cam = start_camera();
        cam.move_in(MoveDirection::Forward, 1.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.5), EPS));
    }

    #[test]
    fn opposite_moves_cancel() {
        let mut cam = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 33.0, -20.0);
        let start = cam.position;
        for dir in MoveDirection::ALL {
            cam.move_in(dir, 0.37);
            cam.move_in(dir.opposite(), 0.37);
            assert!(cam.position.abs_diff_eq(start, 1e-5), "{dir:?}");
        }
    }

    #[test]
    fn zero_dt_is_noop() {
        let mut cam = Camera::new(Vec3::new(-4.0, 1.0, 0.5), Vec3::Y, 10.0, 5.0);
        let start = cam.position;
        for dir in MoveDirection::ALL {
            cam.move_in(dir, 0.0);
        }
        assert_eq!(cam.position, start);
    }

    #[test]
    fn strafe_and_lift_follow_basis() {
        let mut cam = start_camera();
        cam.move_in(MoveDirection::Right, 2.0);
        assert!(cam.position.abs_diff_eq(Vec3::new(5.0, 0.0, 5.0), EPS));
        cam.move_in(MoveDirection::Down, 0.4);
        assert!(cam.position.abs_diff_eq(Vec3::new(5.0, -1.0, 5.0), EPS));
    }

    #[test]
    fn moving_keeps_orientation() {
        let mut cam = start_camera();
        let front = cam.front();
        cam.move_in(MoveDirection::Left, 1.0);
        assert_eq!(cam.front(), front);
        assert_eq!((cam.yaw(), cam.pitch()), (-90.0, 0.0));
    }

    #[test]
    fn front_parallel_to_world_up_is_degenerate() {
        // yaw 0, pitch 0 looks along +X; using +X as world-up collapses the cross product
        let cam = Camera::new(Vec3::ZERO, Vec3::X, 0.0, 0.0);
        assert!(cam.front().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.right().is_nan());
        assert!(cam.up().is_nan());
    }
}
