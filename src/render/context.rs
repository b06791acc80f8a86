//! Render-surface state owned by the host.
//!
//! Size, pixel ratio and the camera live in one explicitly passed context
//! instead of process-wide globals.

use glam::Vec3;

use crate::config::CameraConfig;
use crate::utils::OrbitControls;

/// Pixel ratios above this are not worth the fill rate.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct RenderContext {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub camera: OrbitControls,
}

impl RenderContext {
    #[must_use]
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32, camera: &CameraConfig) -> Self {
        let mut controls = OrbitControls::new(camera.default_position, Vec3::ZERO);
        controls.apply_limits(camera);

        Self {
            width,
            height,
            pixel_ratio: device_pixel_ratio.min(MAX_PIXEL_RATIO),
            fov: 75.0,
            camera: controls,
        }
    }

    /// Width over height; `1.0` for a collapsed surface.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    pub fn resize(&mut self, width: u32, height: u32, device_pixel_ratio: f32) {
        self.width = width;
        self.height = height;
        self.pixel_ratio = device_pixel_ratio.min(MAX_PIXEL_RATIO);
        log::debug!("Render surface resized to {width}x{height} @{}", self.pixel_ratio);
    }

    /// Physical pixel size of the drawing buffer.
    #[must_use]
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        (
            (self.width as f32 * self.pixel_ratio).round() as u32,
            (self.height as f32 * self.pixel_ratio).round() as u32,
        )
    }
}
