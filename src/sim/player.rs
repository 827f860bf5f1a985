//! The player's submarine: movement, firing, power-up state machine

use glam::Vec2;

use super::ammo::Ammo;
use super::animation::AnimationCell;
use super::collision::{Hitbox, Rect};
use super::entity::{Cue, FrameContext, sweep};
use super::projectile::Projectile;
use crate::consts::*;

/// Vertical movement intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalIntent {
    Up,
    Down,
    #[default]
    None,
}

impl VerticalIntent {
    /// Resolve held keys; holding both cancels out
    pub fn from_held(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => VerticalIntent::Up,
            (false, true) => VerticalIntent::Down,
            _ => VerticalIntent::None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Current vertical speed (pixels per tick)
    pub speed_y: f32,
    pub max_speed: f32,
    pub projectiles: Vec<Projectile>,
    pub animation: AnimationCell,
    /// Sprite sheet row: 0 normal, 1 powered
    pub frame_row: u32,
    pub power_up: bool,
    pub power_up_timer: f32,
    pub power_up_limit: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed_y: 0.0,
            max_speed: PLAYER_MAX_SPEED,
            projectiles: Vec::new(),
            animation: AnimationCell::per_tick(PLAYER_MAX_FRAME),
            frame_row: 0,
            power_up: false,
            power_up_timer: 0.0,
            power_up_limit: POWER_UP_LIMIT_MS,
        }
    }
}

impl Player {
    pub fn update(
        &mut self,
        ctx: &FrameContext,
        intent: VerticalIntent,
        ammo: &mut Ammo,
        cues: &mut Vec<Cue>,
        dt: f32,
    ) {
        self.speed_y = match intent {
            VerticalIntent::Up => -self.max_speed,
            VerticalIntent::Down => self.max_speed,
            VerticalIntent::None => 0.0,
        };
        self.pos.y += self.speed_y;

        // Half the sprite may leave the screen at either edge
        let half = self.size.y * 0.5;
        self.pos.y = self.pos.y.clamp(-half, ctx.height - half);

        for projectile in &mut self.projectiles {
            projectile.update(ctx, dt);
        }
        sweep(&mut self.projectiles);

        self.animation.advance_looping(dt);

        if self.power_up {
            self.power_up_timer += dt;
            if self.power_up_timer >= self.power_up_limit {
                self.power_up_timer = 0.0;
                self.power_up = false;
                self.frame_row = 0;
                cues.push(Cue::PowerDown);
                log::debug!("Power-up expired");
            } else {
                self.frame_row = 1;
                ammo.trickle(POWER_UP_AMMO_TRICKLE);
            }
        }
    }

    /// Primary fire. Consumes a round when one is available; the cue plays
    /// regardless, and a powered player also fires the free bottom shot.
    pub fn shoot_top(&mut self, ammo: &mut Ammo, cues: &mut Vec<Cue>) {
        if ammo.try_take() {
            let (dx, dy) = MUZZLE_TOP;
            self.projectiles
                .push(Projectile::new(self.pos.x + dx, self.pos.y + dy));
        }
        cues.push(Cue::Shot);
        if self.power_up {
            self.shoot_bottom();
        }
    }

    /// Secondary power-up shot; never needs or consumes ammo
    pub fn shoot_bottom(&mut self) {
        let (dx, dy) = MUZZLE_BOTTOM;
        self.projectiles
            .push(Projectile::new(self.pos.x + dx, self.pos.y + dy));
    }

    pub fn enter_power_up(&mut self, ammo: &mut Ammo, cues: &mut Vec<Cue>) {
        self.power_up_timer = 0.0;
        self.power_up = true;
        ammo.refill();
        cues.push(Cue::PowerUp);
        log::debug!("Power-up active for {}ms", self.power_up_limit);
    }
}

impl Hitbox for Player {
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Repeats primary fire while the trigger is held
#[derive(Debug, Clone, Default)]
pub struct AutoFire {
    timer: f32,
}

impl AutoFire {
    /// Restart the repeat period (after a manual press)
    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Returns true when a repeat shot is due
    pub fn update(&mut self, held: bool, dt: f32) -> bool {
        if !held {
            self.timer = 0.0;
            return false;
        }
        if self.timer > AUTO_FIRE_INTERVAL_MS {
            self.timer = 0.0;
            true
        } else {
            self.timer += dt;
            false
        }
    }
}
