//! One-shot explosion effects

use glam::Vec2;
use rand::Rng;

use super::animation::AnimationCell;
use super::entity::{Expiring, FrameContext};
use crate::consts::*;

/// Cosmetic flavour of an explosion (selects the sprite sheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionKind {
    Smoke,
    Fire,
}

#[derive(Debug, Clone)]
pub struct Explosion {
    pub kind: ExplosionKind,
    /// Top-left corner of the sprite cell
    pub pos: Vec2,
    pub size: Vec2,
    pub animation: AnimationCell,
    pub marked_for_deletion: bool,
}

impl Explosion {
    /// Explosion centred on `center`
    pub fn new(kind: ExplosionKind, center: Vec2) -> Self {
        let size = Vec2::splat(EXPLOSION_SIZE);
        Self {
            kind,
            pos: center - size * 0.5,
            size,
            animation: AnimationCell::with_fps(EXPLOSION_MAX_FRAME, EXPLOSION_FPS),
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext, dt: f32) {
        self.pos.x -= ctx.speed;
        self.animation.advance_once(dt);
        if self.animation.is_finished() {
            self.marked_for_deletion = true;
        }
    }
}

impl Expiring for Explosion {
    fn is_marked(&self) -> bool {
        self.marked_for_deletion
    }
}

/// Queue a smoke + fire pair at `center` with 50% probability.
///
/// Returns true when the pair was spawned.
pub fn spawn_destruction_pair<R: Rng + ?Sized>(
    explosions: &mut Vec<Explosion>,
    center: Vec2,
    rng: &mut R,
) -> bool {
    if rng.random::<f32>() < 0.5 {
        explosions.push(Explosion::new(ExplosionKind::Smoke, center));
        explosions.push(Explosion::new(ExplosionKind::Fire, center));
        true
    } else {
        false
    }
}
