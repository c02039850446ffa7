#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::geometry::Point;

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are in screen pixels.
/// `zoom` is a scale factor (1.0 = no zoom), always within
/// [`MIN_SCALE`]..=[`MAX_SCALE`] when changed through [`Camera::zoom_at`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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
    /// Convert a screen-space point (pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the view by a raw screen-space delta. Panning is not scaled.
    pub fn pan_by(&mut self, screen_delta: Point) {
        self.pan_x += screen_delta.x;
        self.pan_y += screen_delta.y;
    }

    /// Multiply the zoom by `factor` while keeping the world point under
    /// `screen` stationary.
    ///
    /// The resulting zoom is clamped to [`MIN_SCALE`]..=[`MAX_SCALE`]. A
    /// non-finite or non-positive factor leaves the camera untouched.
    pub fn zoom_at(&mut self, screen: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let before = self.screen_to_world(screen);
        self.zoom = (self.zoom * factor).clamp(MIN_SCALE, MAX_SCALE);
        let after = self.screen_to_world(screen);
        self.pan_x += (after.x - before.x) * self.zoom;
        self.pan_y += (after.y - before.y) * self.zoom;
    }
}
