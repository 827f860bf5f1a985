//! Player-fired projectile

use glam::Vec2;

use super::animation::AnimationCell;
use super::collision::{Hitbox, Rect};
use super::entity::{Expiring, FrameContext};
use crate::consts::*;

/// A projectile travelling rightward at fixed speed
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub speed: f32,
    pub animation: AnimationCell,
    pub marked_for_deletion: bool,
}

impl Projectile {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
            animation: AnimationCell::with_fps(PROJECTILE_MAX_FRAME, PROJECTILE_FPS),
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext, dt: f32) {
        self.pos.x += self.speed;
        self.animation.advance_looping(dt);
        if self.pos.x > ctx.width * PROJECTILE_RANGE {
            self.marked_for_deletion = true;
        }
    }
}

impl Hitbox for Projectile {
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

impl Expiring for Projectile {
    fn is_marked(&self) -> bool {
        self.marked_for_deletion
    }
}
