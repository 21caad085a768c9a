//! Canvas sizing and level-to-canvas scaling
//!
//! The simulation works in fixed level units; resolution only matters here.

use glam::Vec2;

use crate::consts::{LEVEL_VIEW_HEIGHT, LEVEL_VIEW_WIDTH};
use crate::sim::Aabb;

/// Width / height of the play area
pub const ASPECT_RATIO: f32 = LEVEL_VIEW_WIDTH / LEVEL_VIEW_HEIGHT;

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: LEVEL_VIEW_WIDTH,
            height: LEVEL_VIEW_HEIGHT,
        }
    }
}

impl Viewport {
    /// Largest canvas with the play-area aspect ratio that fits in the window
    pub fn fit(window_width: f32, window_height: f32) -> Self {
        let (mut width, mut height) = (window_width.max(0.0), window_height.max(0.0));
        if height > 0.0 && width / height > ASPECT_RATIO {
            width = height * ASPECT_RATIO;
        } else {
            height = width / ASPECT_RATIO;
        }
        Self { width, height }
    }

    /// Pixels per level unit on each axis
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.width / LEVEL_VIEW_WIDTH, self.height / LEVEL_VIEW_HEIGHT)
    }

    /// Screen-space rectangle (level units) to canvas pixels
    pub fn to_canvas(&self, rect: &Aabb) -> Aabb {
        let scale = self.scale();
        Aabb::from_pos_size(rect.pos() * scale, rect.size() * scale)
    }

    /// Canvas pixel to level units (for pointer hit testing)
    pub fn to_level(&self, point: Vec2) -> Vec2 {
        point / self.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_window_limits_width() {
        let vp = Viewport::fit(1920.0, 600.0);
        assert_eq!(vp.width, 1200.0);
        assert_eq!(vp.height, 600.0);
    }

    #[test]
    fn test_fit_tall_window_limits_height() {
        let vp = Viewport::fit(400.0, 900.0);
        assert_eq!(vp.width, 400.0);
        assert_eq!(vp.height, 200.0);
    }

    #[test]
    fn test_to_canvas_scales_both_axes() {
        let vp = Viewport::fit(1600.0, 800.0);
        assert_eq!(vp.scale(), Vec2::new(2.0, 2.0));
        let rect = vp.to_canvas(&Aabb::new(200.0, 300.0, 100.0, 20.0));
        assert_eq!(rect, Aabb::new(400.0, 600.0, 200.0, 40.0));
        assert_eq!(vp.to_level(Vec2::new(400.0, 600.0)), Vec2::new(200.0, 300.0));
    }

    #[test]
    fn test_degenerate_window() {
        let vp = Viewport::fit(0.0, 0.0);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
    }
}
