//! Trackball-style orbit camera.
//!
//! The camera orbits a target point at a fixed distance, described by a
//! yaw/pitch pair. Left-drag orbits, right- or middle-drag pans the target
//! in the view plane, and the scroll wheel zooms.

use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

const ORBIT_SENSITIVITY: f32 = 0.008;
const PAN_SENSITIVITY: f32 = 0.0015;
const ZOOM_STEP: f32 = 0.9;
const MIN_DISTANCE: f32 = 1e-3;

// Keep the eye off the poles so the view basis stays well-defined.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

pub struct OrbitCamera {
    pub target: Point3<f32>,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Point3::origin(),
            distance: 10.0,
            yaw: 0.6,
            pitch: 0.5,
            fovy: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl OrbitCamera {
    /// Positions the camera so the bounding box `(min, max)` fills the view.
    pub fn fit(&mut self, min: [f32; 3], max: [f32; 3]) {
        self.target = Point3::new(
            (min[0] + max[0]) * 0.5,
            (min[1] + max[1]) * 0.5,
            (min[2] + max[2]) * 0.5,
        );

        let half_diag = 0.5
            * ((max[0] - min[0]).powi(2) + (max[1] - min[1]).powi(2) + (max[2] - min[2]).powi(2))
                .sqrt();
        let radius = half_diag.max(MIN_DISTANCE);

        // Distance at which a sphere of `radius` fits in the vertical fov,
        // with some margin.
        self.distance = radius / (self.fovy * 0.5).sin() * 1.2;
        self.zfar = (self.distance + radius) * 10.0;
    }

    fn eye_offset(&self) -> Vector3<f32> {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vector3::new(cp * sy, sp, cp * cy) * self.distance
    }

    pub fn eye(&self) -> Point3<f32> {
        self.target + self.eye_offset()
    }

    pub fn view(&self) -> Matrix4<f32> {
        Isometry3::look_at_rh(&self.eye(), &self.target, &Vector3::y()).to_homogeneous()
    }

    /// Combined view-projection matrix for the given aspect ratio,
    /// mapping depth to wgpu's [0, 1] clip range.
    pub fn view_proj(&self, aspect: f32) -> Matrix4<f32> {
        let proj = Perspective3::new(aspect, self.fovy, self.znear, self.zfar).to_homogeneous();
        opengl_to_wgpu() * proj * self.view()
    }

    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = -self.eye_offset().normalize();
        let right = forward.cross(&Vector3::y()).normalize();
        let up = right.cross(&forward);

        let scale = self.distance * PAN_SENSITIVITY;
        self.target -= right * dx * scale;
        self.target += up * dy * scale;
    }

    /// Zooms by `steps` wheel notches; positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance = (self.distance * ZOOM_STEP.powf(steps)).max(MIN_DISTANCE);
    }
}

/// Maps OpenGL clip depth [-1, 1] (what `Perspective3` produces) to
/// wgpu clip depth [0, 1].
fn opengl_to_wgpu() -> Matrix4<f32> {
    #[rustfmt::skip]
    let m = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.5, 0.5,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Maps raw mouse events onto camera motions.
#[derive(Default)]
pub struct CameraController {
    orbiting: bool,
    panning: bool,
    last_pos: Option<(f64, f64)>,
}

impl CameraController {
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.orbiting = pressed,
            MouseButton::Right | MouseButton::Middle => self.panning = pressed,
            _ => {}
        }
        if !self.orbiting && !self.panning {
            self.last_pos = None;
        }
    }

    /// Returns `true` if the camera moved and the scene needs a redraw.
    pub fn on_cursor_moved(
        &mut self,
        position: PhysicalPosition<f64>,
        camera: &mut OrbitCamera,
    ) -> bool {
        let (x, y) = (position.x, position.y);
        let moved = match self.last_pos {
            Some((lx, ly)) if self.orbiting => {
                camera.orbit((x - lx) as f32, (y - ly) as f32);
                true
            }
            Some((lx, ly)) if self.panning => {
                camera.pan((x - lx) as f32, (y - ly) as f32);
                true
            }
            _ => false,
        };

        if self.orbiting || self.panning {
            self.last_pos = Some((x, y));
        }
        moved
    }

    /// Returns `true` if the camera moved and the scene needs a redraw.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta, camera: &mut OrbitCamera) -> bool {
        let steps = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(p) => (p.y / 50.0) as f32,
        };
        if steps == 0.0 {
            return false;
        }
        camera.zoom(steps);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_centers_target_on_box() {
        let mut camera = OrbitCamera::default();
        camera.fit([0.0, 0.0, 0.0], [10.0, 20.0, 30.0]);

        assert_eq!(camera.target, Point3::new(5.0, 10.0, 15.0));
        assert!(camera.distance > 0.0);
    }

    #[test]
    fn fitted_target_projects_to_clip_center() {
        let mut camera = OrbitCamera::default();
        camera.fit([0.0, 0.0, 0.0], [10.0, 20.0, 30.0]);

        let vp = camera.view_proj(800.0 / 600.0);
        let clip = vp * camera.target.to_homogeneous();
        assert!(clip.w > 0.0);

        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&ndc.z), "depth {} outside [0,1]", ndc.z);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 1e6);
        assert!(camera.pitch <= MAX_PITCH);
        camera.orbit(0.0, -1e6);
        assert!(camera.pitch >= -MAX_PITCH);
    }

    #[test]
    fn zoom_keeps_positive_distance() {
        let mut camera = OrbitCamera::default();
        camera.zoom(1e4);
        assert!(camera.distance >= MIN_DISTANCE);
    }

    #[test]
    fn drag_without_press_does_not_move_camera() {
        let mut camera = OrbitCamera::default();
        let before = camera.eye();

        let mut controller = CameraController::default();
        let moved = controller.on_cursor_moved(PhysicalPosition::new(100.0, 100.0), &mut camera);
        assert!(!moved);
        assert_eq!(camera.eye(), before);
    }

    #[test]
    fn orbit_drag_moves_eye_but_not_target() {
        let mut camera = OrbitCamera::default();
        let target = camera.target;
        let eye = camera.eye();

        let mut controller = CameraController::default();
        controller.on_button(MouseButton::Left, ElementState::Pressed);
        controller.on_cursor_moved(PhysicalPosition::new(0.0, 0.0), &mut camera);
        let moved = controller.on_cursor_moved(PhysicalPosition::new(40.0, 25.0), &mut camera);

        assert!(moved);
        assert_eq!(camera.target, target);
        assert_ne!(camera.eye(), eye);
    }
}
