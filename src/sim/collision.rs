//! Axis-aligned collision geometry
//!
//! Every collidable in a level is an `Aabb` in level units. The only query
//! is strict overlap: rectangles that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from a top-left position and a size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Same box moved horizontally (used to apply the camera scroll)
    #[inline]
    pub fn shifted_x(&self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }

    /// Same box with its x replaced
    #[inline]
    pub fn with_x(&self, x: f32) -> Self {
        Self { x, ..*self }
    }

    /// Width and height are both non-negative
    pub fn is_valid(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

/// Strict open-interval overlap test
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_shared_edge_is_not_a_collision() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &below));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(intersects(&outer, &inner));
        assert!(intersects(&inner, &outer));
    }

    #[test]
    fn test_shift_and_validity() {
        let a = Aabb::from_pos_size(Vec2::new(200.0, 300.0), Vec2::new(100.0, 20.0));
        assert_eq!(a.shifted_x(-50.0).x, 150.0);
        assert_eq!(a.with_x(7.0).pos(), Vec2::new(7.0, 300.0));
        assert_eq!(a.size(), Vec2::new(100.0, 20.0));
        assert!(a.is_valid());
        assert!(!Aabb::new(0.0, 0.0, -1.0, 5.0).is_valid());
    }

    fn arb_aabb() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn prop_edge_neighbours_never_collide(a in arb_aabb(), w in 0.0f32..200.0, h in 0.0f32..200.0) {
            let right = Aabb::new(a.x + a.width, a.y, w, h);
            let below = Aabb::new(a.x, a.y + a.height, w, h);
            prop_assert!(!intersects(&a, &below));
            prop_assert!(!intersects(&a, &right));
        }
    }
}
