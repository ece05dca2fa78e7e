use haptics_config::schema::CameraConfig;

use crate::matrix::{self as mat, Mat4};

/// Fixed perspective camera: pulled back along Z, tilted about X.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub distance: f32,
    pub tilt_degrees: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            distance: config.distance,
            tilt_degrees: config.tilt_degrees,
            fov_degrees: config.fov_degrees,
            near: config.near,
            far: config.far,
        }
    }

    /// World to eye transform: translate by `-distance` on Z, then tilt.
    pub fn view(&self) -> Mat4 {
        mat::mul(
            &mat::translate(0.0, 0.0, -self.distance),
            &mat::rotate_x(self.tilt_degrees.to_radians()),
        )
    }

    /// Projection for a viewport with the given width/height ratio.
    ///
    /// A degenerate aspect (zero-sized or minimized window) falls back to 1.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        mat::perspective(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}
