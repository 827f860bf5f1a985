//! Gear debris thrown out of damaged enemies
//!
//! Pure per-tick physics: gravity, a handful of damped bounces off a
//! randomized floor line, and a constant spin.

use glam::Vec2;
use rand::Rng;

use super::entity::{Expiring, FrameContext};
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Particle {
    /// Centre of the particle (drawn rotated around this point)
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite cell on the 3x3 gear sheet
    pub cell: (u32, u32),
    pub size_modifier: f32,
    pub size: f32,
    pub gravity: f32,
    pub angle: f32,
    /// Angular velocity (radians per tick)
    pub va: f32,
    pub bounced: u32,
    /// Distance above the world bottom where bouncing starts
    pub bounce_floor: f32,
    pub marked_for_deletion: bool,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        // One decimal place, 0.5..=1.0
        let size_modifier = ((rng.random::<f32>() * 0.5 + 0.5) * 10.0).round() / 10.0;
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(
                rng.random::<f32>() * 6.0 - 3.0,
                rng.random::<f32>() * -15.0,
            ),
            cell: (rng.random_range(0..3), rng.random_range(0..3)),
            size_modifier,
            size: PARTICLE_SPRITE_SIZE * size_modifier,
            gravity: PARTICLE_GRAVITY,
            angle: 0.0,
            va: rng.random::<f32>() * 0.2 - 0.1,
            bounced: 0,
            bounce_floor: rng.random::<f32>() * 80.0 + 60.0,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        self.angle += self.va;
        self.vel.y += self.gravity;
        // Horizontal velocity is measured leftward, on top of the scroll
        self.pos.x -= self.vel.x + ctx.speed;
        self.pos.y += self.vel.y;

        if self.pos.y > ctx.height + self.size || self.pos.x < -self.size {
            self.marked_for_deletion = true;
        }

        if self.pos.y > ctx.height - self.bounce_floor && self.bounced < PARTICLE_MAX_BOUNCES {
            self.bounced += 1;
            self.vel.y *= -0.5;
        }
    }
}

impl Expiring for Particle {
    fn is_marked(&self) -> bool {
        self.marked_for_deletion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ctx() -> FrameContext {
        FrameContext {
            width: 1500.0,
            height: 500.0,
            speed: 1.0,
        }
    }

    #[test]
    fn test_randomized_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::new(10.0, 10.0, &mut rng);
            assert!((0.5..=1.0).contains(&p.size_modifier));
            assert!((p.size - 50.0 * p.size_modifier).abs() < 1e-4);
            assert!((-3.0..3.0).contains(&p.vel.x));
            assert!(p.vel.y <= 0.0 && p.vel.y > -15.0);
            assert!((60.0..140.0).contains(&p.bounce_floor));
            assert!(p.cell.0 < 3 && p.cell.1 < 3);
        }
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut p = Particle::new(700.0, 100.0, &mut rng);
        p.vel = Vec2::new(0.0, 0.0);
        p.update(&ctx());
        assert_eq!(p.vel.y, 0.5);
        p.update(&ctx());
        assert_eq!(p.vel.y, 1.0);
        assert_eq!(p.pos.y, 101.5);
        // Scroll speed drags it left
        assert_eq!(p.pos.x, 698.0);
    }

    #[test]
    fn test_bounce_budget() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = Particle::new(700.0, 100.0, &mut rng);
        p.bounce_floor = 100.0;
        p.vel = Vec2::ZERO;
        for _ in 0..2000 {
            p.update(&ctx());
            if p.marked_for_deletion {
                break;
            }
        }
        assert_eq!(p.bounced, PARTICLE_MAX_BOUNCES);
    }

    #[test]
    fn test_expires_off_left_edge() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut p = Particle::new(-40.0, 100.0, &mut rng);
        p.size = 30.0;
        p.vel = Vec2::new(0.0, 0.0);
        p.update(&ctx());
        assert!(p.marked_for_deletion);
    }
}
