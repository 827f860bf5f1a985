//! Angler Raid - A side-scrolling underwater arcade shooter
//!
//! Core modules:
//! - `sim`: Delta-time simulation (entities, collisions, spawning, scoring)
//! - `renderer`: Draw pass over an abstract 2D surface
//! - `platform`: Browser host (canvas surface, input, animation loop)
//! - `tuning`: Data-driven world balance
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Fixed entity constants (world-level knobs live in `Tuning`)
pub mod consts {
    /// Nominal frame time used by headless runs (ms)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Player sprite cell and hitbox
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 190.0;
    pub const PLAYER_START_X: f32 = 20.0;
    pub const PLAYER_START_Y: f32 = 100.0;
    /// Vertical speed in pixels per tick
    pub const PLAYER_MAX_SPEED: f32 = 3.0;
    pub const PLAYER_MAX_FRAME: u32 = 37;
    /// Muzzle offsets relative to the player's top-left corner
    pub const MUZZLE_TOP: (f32, f32) = (80.0, 30.0);
    pub const MUZZLE_BOTTOM: (f32, f32) = (80.0, 175.0);

    /// Power-up duration (ms) and ammo trickle per tick while active
    pub const POWER_UP_LIMIT_MS: f32 = 10_000.0;
    pub const POWER_UP_AMMO_TRICKLE: f32 = 0.1;

    /// Auto-fire repeat period while fire is held (ms)
    pub const AUTO_FIRE_INTERVAL_MS: f32 = 100.0;

    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 3.0;
    pub const PROJECTILE_SPEED: f32 = 3.0;
    pub const PROJECTILE_MAX_FRAME: u32 = 3;
    pub const PROJECTILE_FPS: f32 = 20.0;
    /// Projectiles expire past this fraction of the world width
    pub const PROJECTILE_RANGE: f32 = 0.8;

    pub const PARTICLE_SPRITE_SIZE: f32 = 50.0;
    pub const PARTICLE_GRAVITY: f32 = 0.5;
    pub const PARTICLE_MAX_BOUNCES: u32 = 5;

    pub const EXPLOSION_SIZE: f32 = 200.0;
    pub const EXPLOSION_MAX_FRAME: u32 = 8;
    pub const EXPLOSION_FPS: f32 = 30.0;

    pub const SHIELD_MAX_FRAME: u32 = 24;
    pub const SHIELD_FPS: f32 = 30.0;

    pub const ENEMY_MAX_FRAME: u32 = 37;
    /// Drones released when a hive whale is destroyed
    pub const HIVE_DRONE_COUNT: usize = 5;

    pub const LAYER_WIDTH: f32 = 1768.0;
    pub const LAYER_HEIGHT: f32 = 500.0;
}
