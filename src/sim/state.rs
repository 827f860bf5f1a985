//! World state
//!
//! Everything one session owns. A new session is a new `World`; nothing
//! here is ever reset in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ammo::Ammo;
use super::background::Background;
use super::enemy::Enemy;
use super::entity::{Cue, FrameContext};
use super::explosion::Explosion;
use super::particle::Particle;
use super::player::{AutoFire, Player};
use super::shield::Shield;
use crate::tuning::Tuning;

/// End-of-session result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct World {
    /// Session seed
    pub seed: u64,
    pub rng: Pcg32,
    pub width: f32,
    pub height: f32,
    /// Global scroll speed (pixels per tick)
    pub speed: f32,
    /// Elapsed session time (ms)
    pub game_time: f32,
    pub time_limit: f32,
    pub score: i64,
    pub winning_score: i64,
    pub ammo: Ammo,
    /// Terminal flag; never cleared
    pub game_over: bool,
    /// Draw hitbox overlays
    pub debug: bool,
    /// Repeat fire while the trigger is held
    pub auto_fire_enabled: bool,
    pub enemy_timer: f32,
    pub enemy_interval: f32,
    pub background: Background,
    pub player: Player,
    pub auto_fire: AutoFire,
    pub shield: Shield,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub explosions: Vec<Explosion>,
    /// Audio cues raised since the last drain
    pub cues: Vec<Cue>,
}

impl World {
    /// New session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(&Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: &Tuning, seed: u64) -> Self {
        log::info!(
            "New session: seed={seed}, {}x{}, time limit {}ms",
            tuning.width,
            tuning.height,
            tuning.time_limit
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width: tuning.width,
            height: tuning.height,
            speed: tuning.speed,
            game_time: 0.0,
            time_limit: tuning.time_limit,
            score: 0,
            winning_score: tuning.winning_score,
            ammo: Ammo::new(tuning.ammo, tuning.max_ammo, tuning.ammo_interval),
            game_over: false,
            debug: false,
            auto_fire_enabled: true,
            enemy_timer: 0.0,
            enemy_interval: tuning.enemy_interval,
            background: Background::default(),
            player: Player::default(),
            auto_fire: AutoFire::default(),
            shield: Shield::default(),
            enemies: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            cues: Vec::new(),
        }
    }

    /// Read-only view handed to entity updates
    pub fn context(&self) -> FrameContext {
        FrameContext {
            width: self.width,
            height: self.height,
            speed: self.speed,
        }
    }

    /// `None` while the session runs
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            None
        } else if self.score > self.winning_score {
            Some(Outcome::Won)
        } else {
            Some(Outcome::Lost)
        }
    }

    /// Hand pending cues to the audio sink
    pub fn drain_cues(&mut self) -> std::vec::Drain<'_, Cue> {
        self.cues.drain(..)
    }
}
