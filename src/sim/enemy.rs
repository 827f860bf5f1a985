//! Enemy record, variant stat table and spawn table
//!
//! Every variant shares one movement/animation routine; a variant only
//! decides the initial stats, so the taxonomy is a closed enum plus a
//! lookup table rather than a type per creature.

use glam::Vec2;
use rand::Rng;

use super::animation::AnimationCell;
use super::collision::{Hitbox, Rect};
use super::entity::{Expiring, FrameContext};
use crate::consts::*;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Angler1,
    Angler2,
    LuckyFish,
    HiveWhale,
    Drone,
    BulbWhale,
    MoonFish,
    Stalker,
    Razorfin,
}

/// Special collision behaviour attached to some variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyTag {
    /// Ramming it grants a power-up instead of costing a point
    Lucky,
    /// Destroying it grants a power-up
    Moon,
    /// Destroying it releases drones
    Hive,
    Drone,
}

/// Horizontal speed range: `-(base + r * spread)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    pub base: f32,
    pub spread: f32,
}

impl SpeedRange {
    const DEFAULT: SpeedRange = SpeedRange {
        base: 0.5,
        spread: 1.5,
    };

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        -(self.base + rng.random::<f32>() * self.spread)
    }
}

/// Initial stats for one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub width: f32,
    pub height: f32,
    pub lives: u32,
    pub score: u32,
    pub speed: SpeedRange,
    /// Number of sprite sheet rows to pick from
    pub rows: u32,
    pub tag: Option<EnemyTag>,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 9] = [
        EnemyKind::Angler1,
        EnemyKind::Angler2,
        EnemyKind::LuckyFish,
        EnemyKind::HiveWhale,
        EnemyKind::Drone,
        EnemyKind::BulbWhale,
        EnemyKind::MoonFish,
        EnemyKind::Stalker,
        EnemyKind::Razorfin,
    ];

    pub fn stats(self) -> EnemyStats {
        use EnemyKind::*;
        let whale_speed = SpeedRange {
            base: 0.2,
            spread: 1.2,
        };
        let (width, height, lives, score, speed, rows, tag) = match self {
            Angler1 => (228.0, 169.0, 5, 5, SpeedRange::DEFAULT, 3, None),
            Angler2 => (213.0, 165.0, 6, 6, SpeedRange::DEFAULT, 2, None),
            LuckyFish => (99.0, 95.0, 5, 15, SpeedRange::DEFAULT, 2, Some(EnemyTag::Lucky)),
            HiveWhale => (400.0, 227.0, 20, 20, whale_speed, 1, Some(EnemyTag::Hive)),
            Drone => (
                115.0,
                95.0,
                3,
                3,
                SpeedRange {
                    base: 0.5,
                    spread: 4.2,
                },
                2,
                Some(EnemyTag::Drone),
            ),
            BulbWhale => (270.0, 219.0, 20, 20, whale_speed, 2, None),
            MoonFish => (
                227.0,
                240.0,
                10,
                10,
                SpeedRange {
                    base: 2.0,
                    spread: 1.2,
                },
                1,
                Some(EnemyTag::Moon),
            ),
            Stalker => (
                243.0,
                123.0,
                5,
                5,
                SpeedRange {
                    base: 1.0,
                    spread: 1.0,
                },
                1,
                None,
            ),
            Razorfin => (
                187.0,
                149.0,
                7,
                7,
                SpeedRange {
                    base: 1.0,
                    spread: 1.0,
                },
                1,
                None,
            ),
        };
        EnemyStats {
            width,
            height,
            lives,
            score,
            speed,
            rows,
            tag,
        }
    }

    /// Map a uniform draw in [0, 1) through the cumulative spawn table
    pub fn from_draw(r: f32) -> Self {
        match r {
            r if r < 0.1 => EnemyKind::Angler1,
            r if r < 0.3 => EnemyKind::Stalker,
            r if r < 0.5 => EnemyKind::Razorfin,
            r if r < 0.6 => EnemyKind::Angler2,
            r if r < 0.7 => EnemyKind::HiveWhale,
            r if r < 0.8 => EnemyKind::BulbWhale,
            r if r < 0.9 => EnemyKind::MoonFish,
            _ => EnemyKind::LuckyFish,
        }
    }

    /// Probability of this variant in the spawn table (drones never spawn)
    pub fn spawn_weight(self) -> f32 {
        match self {
            EnemyKind::Angler1 => 0.1,
            EnemyKind::Stalker => 0.2,
            EnemyKind::Razorfin => 0.2,
            EnemyKind::Angler2 => 0.1,
            EnemyKind::HiveWhale => 0.1,
            EnemyKind::BulbWhale => 0.1,
            EnemyKind::MoonFish => 0.1,
            EnemyKind::LuckyFish => 0.1,
            EnemyKind::Drone => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed before the world scroll (negative = leftward)
    pub speed_x: f32,
    pub lives: u32,
    pub score: u32,
    pub tag: Option<EnemyTag>,
    pub animation: AnimationCell,
    pub frame_row: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    /// Build a variant at an explicit position
    pub fn new<R: Rng + ?Sized>(kind: EnemyKind, pos: Vec2, rng: &mut R) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            pos,
            size: Vec2::new(stats.width, stats.height),
            speed_x: stats.speed.sample(rng),
            lives: stats.lives,
            score: stats.score,
            tag: stats.tag,
            animation: AnimationCell::per_tick(ENEMY_MAX_FRAME),
            frame_row: rng.random_range(0..stats.rows),
            marked_for_deletion: false,
        }
    }

    /// Enter at the right edge, somewhere inside the safe vertical band
    pub fn spawn<R: Rng + ?Sized>(kind: EnemyKind, ctx: &FrameContext, rng: &mut R) -> Self {
        let height = kind.stats().height;
        let band = (ctx.height * 0.95 - height).max(0.0);
        let y = rng.random::<f32>() * band;
        Self::new(kind, Vec2::new(ctx.width, y), rng)
    }

    /// Draw the variant from the spawn table and spawn it
    pub fn spawn_random<R: Rng + ?Sized>(ctx: &FrameContext, rng: &mut R) -> Self {
        let kind = EnemyKind::from_draw(rng.random::<f32>());
        Self::spawn(kind, ctx, rng)
    }

    /// Drone released from a destroyed hive, placed inside its footprint
    pub fn drone_from<R: Rng + ?Sized>(hive: &Rect, rng: &mut R) -> Self {
        let x = hive.x() + rng.random::<f32>() * hive.width();
        let y = hive.y() + rng.random::<f32>() * hive.height() * 0.5;
        Self::new(EnemyKind::Drone, Vec2::new(x, y), rng)
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        self.pos.x += self.speed_x - ctx.speed;
        if self.pos.x + self.size.x < 0.0 {
            self.marked_for_deletion = true;
        }
        self.animation.advance_looping(0.0);
    }

    /// Apply one hit; returns true when this hit was fatal
    pub fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Hitbox for Enemy {
    fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

impl Expiring for Enemy {
    fn is_marked(&self) -> bool {
        self.marked_for_deletion
    }
}
