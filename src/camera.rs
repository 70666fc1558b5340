#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::geom::{GlobalPoint, LocalPoint};

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are in local (viewport) pixels. `zoom` is the
/// local-pixels-per-world-unit scale factor; callers guarantee `zoom > 0`
/// and this type never checks it.
///
/// The camera is owned by the host editor's view-state and may change
/// between any two calls (a zoom mid-drag, for instance), so shape
/// operations take it as a parameter on every call instead of caching it.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a global x coordinate to local pixels.
    #[must_use]
    pub fn global_to_local_x(&self, x: f64) -> f64 {
        x * self.zoom + self.pan_x
    }

    /// Convert a global y coordinate to local pixels.
    #[must_use]
    pub fn global_to_local_y(&self, y: f64) -> f64 {
        y * self.zoom + self.pan_y
    }

    /// Convert a local x coordinate back to global space.
    #[must_use]
    pub fn local_to_global_x(&self, x: f64) -> f64 {
        (x - self.pan_x) / self.zoom
    }

    /// Convert a local y coordinate back to global space.
    #[must_use]
    pub fn local_to_global_y(&self, y: f64) -> f64 {
        (y - self.pan_y) / self.zoom
    }

    /// Convert a global point to local pixel space.
    #[must_use]
    pub fn global_to_local(&self, p: GlobalPoint) -> LocalPoint {
        LocalPoint::new(self.global_to_local_x(p.x), self.global_to_local_y(p.y))
    }

    /// Convert a local pixel point to global space.
    ///
    /// Inverse of [`Camera::global_to_local`]: the round trip reconstructs
    /// the original point within floating-point tolerance for any fixed
    /// pan/zoom.
    #[must_use]
    pub fn local_to_global(&self, p: LocalPoint) -> GlobalPoint {
        GlobalPoint::new(self.local_to_global_x(p.x), self.local_to_global_y(p.y))
    }
}

/// Viewport dimensions in local pixels, supplied by the rendering host
/// each frame for visibility culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
