//! Axis-aligned bounding boxes
//!
//! Every entity's drawing extent doubles as its hitbox, so a single
//! rectangle type and one overlap test cover all collision checks.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap: touching edges do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x() < other.right()
            && self.right() > other.x()
            && self.y() < other.bottom()
            && self.bottom() > other.y()
    }
}

/// Anything with a hitbox
pub trait Hitbox {
    fn rect(&self) -> Rect;
}

impl Hitbox for Rect {
    fn rect(&self) -> Rect {
        *self
    }
}

/// AABB overlap between two entities
#[inline]
pub fn check_collision<A: Hitbox + ?Sized, B: Hitbox + ?Sized>(a: &A, b: &B) -> bool {
    a.rect().overlaps(&b.rect())
}
