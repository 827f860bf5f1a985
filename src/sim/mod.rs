//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Time arrives as a millisecond delta per update
//! - Seeded RNG only
//! - Stable iteration order (insertion order)

pub mod ammo;
pub mod animation;
pub mod background;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod explosion;
pub mod particle;
pub mod player;
pub mod projectile;
pub mod shield;
pub mod state;
pub mod tick;

pub use ammo::Ammo;
pub use animation::AnimationCell;
pub use background::{Background, Layer};
pub use collision::{Hitbox, Rect, check_collision};
pub use enemy::{Enemy, EnemyKind, EnemyStats, EnemyTag, SpeedRange};
pub use entity::{Cue, Expiring, FrameContext, sweep};
pub use explosion::{Explosion, ExplosionKind, spawn_destruction_pair};
pub use particle::Particle;
pub use player::{AutoFire, Player, VerticalIntent};
pub use projectile::Projectile;
pub use shield::Shield;
pub use state::{Outcome, World};
pub use tick::TickInput;
