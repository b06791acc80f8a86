use glam::{Vec2, Vec3};
use wayfarer_core::Transform;

use crate::config::CameraConfig;

const EPS: f32 = 0.0001;

/// Orbit camera rig.
///
/// Keeps the camera on a sphere around `target`, described by a distance
/// (`radius`), an azimuth (`theta`, measured about +Y from +Z towards +X) and
/// a polar angle (`phi`, from +Y). User orbit and zoom input is damped; the
/// follow logic moves the camera by setting its position and target directly.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,

    /// Camera node transform; `position` is kept on the orbit sphere.
    pub transform: Transform,

    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,

    rotate_delta: Vec2,
    zoom_delta: f32,
}

impl OrbitControls {
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let mut controls = Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: EPS,
            max_distance: f32::INFINITY,
            min_polar: 0.0,
            max_polar: std::f32::consts::PI,

            transform: Transform::from_position(position),

            target,
            radius: 1.0,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
            zoom_delta: 0.0,
        };
        controls.sync_from_position();
        controls
    }

    /// Applies distance and polar-angle limits and re-clamps the camera.
    pub fn apply_limits(&mut self, config: &CameraConfig) {
        self.min_distance = config.min_distance;
        self.max_distance = config.max_distance;
        self.min_polar = config.min_polar;
        self.max_polar = config.max_polar;
        self.sync_from_position();
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Horizontal angle of the camera around its target.
    #[must_use]
    pub fn azimuthal_angle(&self) -> f32 {
        self.theta
    }

    #[must_use]
    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    #[must_use]
    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
        self.sync_from_position();
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.sync_from_position();
    }

    /// Moves camera and pivot together, then re-derives the orbit state.
    pub fn set_position_and_target(&mut self, position: Vec3, target: Vec3) {
        self.transform.position = position;
        self.target = target;
        self.sync_from_position();
    }

    /// Queues an orbit by `(azimuth, polar)` radians; consumed by [`Self::update`].
    pub fn rotate(&mut self, delta: Vec2) {
        self.rotate_delta += delta * self.rotate_speed;
    }

    /// Queues a zoom; positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.zoom_delta += steps;
    }

    /// Consumes queued orbit/zoom input and places the camera.
    pub fn update(&mut self, dt: f32) {
        if self.enable_damping {
            let target_fps = 60.0;
            let retention = (1.0 - self.damping_factor).powf(dt * target_fps);
            let delta_apply = self.rotate_delta * (1.0 - retention);

            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        if self.zoom_delta != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(self.zoom_delta.abs());
            if self.zoom_delta > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.zoom_delta = 0.0;
        }

        self.clamp();
        self.place();
    }

    fn sync_from_position(&mut self) {
        let offset = self.transform.position - self.target;
        let radius = offset.length();
        if radius > EPS {
            self.radius = radius;
            self.theta = offset.x.atan2(offset.z);
            self.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        }
        self.clamp();
        self.place();
    }

    fn clamp(&mut self) {
        let min_phi = self.min_polar.max(EPS);
        let max_phi = self.max_polar.min(std::f32::consts::PI - EPS).max(min_phi);
        self.phi = self.phi.clamp(min_phi, max_phi);
        self.radius = self
            .radius
            .clamp(self.min_distance, self.max_distance.max(self.min_distance));
    }

    fn place(&mut self) {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();

        let offset = Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        );

        self.transform.position = self.target + offset;
        self.transform.look_at(self.target, Vec3::Y);
    }
}
