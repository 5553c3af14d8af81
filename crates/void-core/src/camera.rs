use crate::constants::CAMERA_SPEED_PX_PER_SEC;
use std::time::Duration;

/// Reduce `offset` into `[0, virtual_height)` with true (floored) modulo, so
/// negative offsets from scrolling up wrap to the bottom of the canvas.
///
/// A non-positive or non-finite height collapses everything to 0.
pub fn wrap_offset(offset: f64, virtual_height: f64) -> f64 {
    if !(virtual_height > 0.0 && virtual_height.is_finite() && offset.is_finite()) {
        return 0.0;
    }
    let wrapped = offset.rem_euclid(virtual_height);
    // rem_euclid can round up to exactly `virtual_height` for tiny negatives
    if wrapped >= virtual_height {
        0.0
    } else {
        wrapped
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub speed_px_per_sec: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed_px_per_sec: CAMERA_SPEED_PX_PER_SEC,
        }
    }
}

/// Camera offset plus the canvas height it wraps around.
///
/// The stored offset is re-wrapped after every change so it never grows
/// without bound, however long the view stays open.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    offset: f64,
    virtual_height: f64,
    config: CameraConfig,
}

impl Camera {
    pub fn new(virtual_height: f32, config: CameraConfig) -> Self {
        Self {
            offset: 0.0,
            virtual_height: virtual_height as f64,
            config,
        }
    }

    /// Constant-velocity drift for one animation tick.
    pub fn advance(&mut self, dt: Duration) {
        self.offset += self.config.speed_px_per_sec * dt.as_secs_f64();
        self.rewrap();
    }

    /// Apply a discrete wheel delta (pixels, positive = down).
    pub fn scroll(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.offset += delta_y;
        self.rewrap();
    }

    pub fn set_virtual_height(&mut self, virtual_height: f32) {
        self.virtual_height = virtual_height as f64;
        self.rewrap();
    }

    #[inline]
    pub fn wrapped_offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn virtual_height(&self) -> f64 {
        self.virtual_height
    }

    #[inline]
    pub fn config(&self) -> CameraConfig {
        self.config
    }

    fn rewrap(&mut self) {
        self.offset = wrap_offset(self.offset, self.virtual_height);
    }
}
