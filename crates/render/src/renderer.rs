use glam::{Mat4, Vec3, Vec4Swizzles};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Right-handed perspective with a 0..1 depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSubmission {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    /// Multiply the sampled texture by the vertex color; when off, vertex color only.
    pub light_on: bool,
}

impl FrameSubmission {
    /// World-space eye position implied by the view matrix.
    pub fn eye(&self) -> Vec3 {
        self.view.inverse().w_axis.xyz()
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes a submission and produces output. It never reaches
/// back into the camera or frame loop.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &FrameSubmission) -> Self::Output;
}

/// Debug text renderer, a stand-in for the GPU backend.
///
/// Produces a human-readable summary of a submission. Useful for CLI output,
/// logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameSubmission) -> String {
        let eye = tidy(frame.eye());
        // Camera looks down -Z in view space
        let look = tidy(frame.view.inverse().transform_vector3(Vec3::NEG_Z));
        let spun = frame.model.transform_vector3(Vec3::X);
        let spin_degrees = spun.z.atan2(spun.x).to_degrees();

        let mut out = String::new();
        out.push_str(&format!(
            "eye=({:.2}, {:.2}, {:.2}) look=({:.2}, {:.2}, {:.2})\n",
            eye.x, eye.y, eye.z, look.x, look.y, look.z
        ));
        out.push_str(&format!(
            "model spin={:.1}deg light={}\n",
            // Rotation about +Y carries +X toward -Z, so negate to get a positive angle
            -spin_degrees,
            if frame.light_on { "on" } else { "off" }
        ));
        out
    }
}

/// Round to display precision and fold negative zero, so output is stable.
fn tidy(v: Vec3) -> Vec3 {
    (v * 100.0).round() / 100.0 + Vec3::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(eye: Vec3, light_on: bool) -> FrameSubmission {
        FrameSubmission {
            model: Mat4::IDENTITY,
            view: Mat4::look_at_rh(eye, eye + Vec3::NEG_Z, Vec3::Y),
            projection: Projection::default().matrix(),
            light_on,
        }
    }

    #[test]
    fn projection_default() {
        let p = Projection::default();
        assert_eq!(p.fov_degrees, 45.0);
        assert!((p.aspect - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!((p.near, p.far), (0.1, 100.0));
    }

    #[test]
    fn projection_depth_range() {
        let m = Projection::default().matrix();
        let near = m.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn eye_recovered_from_view() {
        let f = submission(Vec3::new(1.0, 2.0, 5.0), true);
        assert!(f.eye().abs_diff_eq(Vec3::new(1.0, 2.0, 5.0), 1e-5));
    }

    #[test]
    fn debug_renderer_reports_light() {
        let renderer = DebugTextRenderer::new();
        let on = renderer.render(&submission(Vec3::new(0.0, 0.0, 5.0), true));
        let off = renderer.render(&submission(Vec3::new(0.0, 0.0, 5.0), false));

        assert!(on.contains("light=on"));
        assert!(off.contains("light=off"));
        assert!(on.contains("eye=(0.00, 0.00, 5.00)"));
        assert!(on.contains("look=(0.00, 0.00, -1.00)"));
    }

    #[test]
    fn debug_renderer_reports_spin() {
        let mut f = submission(Vec3::ZERO, true);
        f.model = Mat4::from_rotation_y(90f32.to_radians());
        let out = DebugTextRenderer::new().render(&f);
        assert!(out.contains("spin=90.0deg"), "{out}");
    }
}
