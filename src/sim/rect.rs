//! Axis-aligned box geometry shared by every entity
//!
//! Screen space: origin at the top-left corner, `y` grows downward.
//! A rect is defined by:
//! - pos: top-left corner
//! - size: width and height, both strictly positive

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in surface space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width (x) and height (y)
    pub size: Vec2,
}

impl Rect {
    /// Build a rect, panicking on non-finite components or a non-positive size.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        let rect = Self { pos, size };
        rect.assert_valid();
        rect
    }

    /// Invariant check: finite position, finite strictly positive size.
    #[inline]
    pub fn assert_valid(&self) {
        assert!(self.pos.is_finite(), "entity position must be finite: {:?}", self.pos);
        assert!(
            self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0,
            "entity size must be finite and positive: {:?}",
            self.size
        );
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Open-interval overlap: both axes need strictly positive overlap.
    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
