//! Per-frame update pass
//!
//! Fans out to every entity, resolves collisions, sweeps expired entities
//! and runs the ammo and spawn timers.

use glam::Vec2;
use rand::Rng;

use super::collision::{Hitbox, check_collision};
use super::enemy::{Enemy, EnemyTag};
use super::entity::{Cue, FrameContext, sweep};
use super::explosion::spawn_destruction_pair;
use super::particle::Particle;
use super::player::VerticalIntent;
use super::state::World;
use crate::consts::HIVE_DRONE_COUNT;

/// Input state for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys currently held
    pub up: bool,
    pub down: bool,
    /// Fire was pressed since the last tick
    pub fire_pressed: bool,
    /// Fire is currently held (drives auto-fire)
    pub fire_held: bool,
    /// Toggle the hitbox overlay
    pub toggle_debug: bool,
}

impl World {
    /// Advance the world by `dt` milliseconds
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        self.apply_input(input, dt);

        if !self.game_over {
            self.game_time += dt;
            if self.game_time > self.time_limit {
                self.game_over = true;
                log::info!(
                    "Time up after {:.1}s: score {} ({:?})",
                    self.game_time * 0.001,
                    self.score,
                    self.outcome()
                );
            }
        }

        let ctx = self.context();
        self.background.update(&ctx);
        let intent = VerticalIntent::from_held(input.up, input.down);
        self.player
            .update(&ctx, intent, &mut self.ammo, &mut self.cues, dt);

        self.ammo.regenerate(dt);

        self.shield.update(dt);
        for particle in &mut self.particles {
            particle.update(&ctx);
        }
        sweep(&mut self.particles);
        for explosion in &mut self.explosions {
            explosion.update(&ctx, dt);
        }
        sweep(&mut self.explosions);

        self.resolve_enemies(&ctx);
        sweep(&mut self.enemies);

        if self.enemy_timer > self.enemy_interval && !self.game_over {
            self.add_enemy();
            self.enemy_timer = 0.0;
        } else {
            self.enemy_timer += dt;
        }
    }

    /// Update the world bounds. Entities are left where they are and
    /// settle on their own next update.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        log::info!("World resized to {width}x{height}");
    }

    /// Primary fire (space bar)
    pub fn shoot_top(&mut self) {
        self.player.shoot_top(&mut self.ammo, &mut self.cues);
    }

    /// Spawn one enemy from the spawn table
    pub fn add_enemy(&mut self) {
        let ctx = self.context();
        let enemy = Enemy::spawn_random(&ctx, &mut self.rng);
        log::debug!("Spawned {:?} at y={:.0}", enemy.kind, enemy.pos.y);
        self.enemies.push(enemy);
    }

    fn apply_input(&mut self, input: &TickInput, dt: f32) {
        if input.toggle_debug {
            self.debug = !self.debug;
            log::info!("Debug overlay {}", if self.debug { "on" } else { "off" });
        }

        if input.fire_pressed {
            self.shoot_top();
            self.auto_fire.reset();
        } else if self.auto_fire_enabled && self.auto_fire.update(input.fire_held, dt) {
            self.shoot_top();
        }
    }

    fn resolve_enemies(&mut self, ctx: &FrameContext) {
        // Drones released this pass join the collection after the loop
        let mut released: Vec<Enemy> = Vec::new();

        for enemy in &mut self.enemies {
            enemy.update(ctx);
            if enemy.marked_for_deletion {
                continue;
            }

            // Ramming
            if check_collision(&self.player, &*enemy) {
                enemy.marked_for_deletion = true;
                let center = enemy.center();
                spawn_destruction_pair(&mut self.explosions, center, &mut self.rng);
                self.cues.push(Cue::Hit);
                self.shield.reset(&mut self.cues);
                burst(&mut self.particles, center, enemy.score, &mut self.rng);
                if enemy.tag == Some(EnemyTag::Lucky) {
                    self.player.enter_power_up(&mut self.ammo, &mut self.cues);
                } else if !self.game_over {
                    self.score -= 1;
                }
            }

            // Shots
            let mut grant_power_up = false;
            for projectile in &mut self.player.projectiles {
                if enemy.marked_for_deletion {
                    break;
                }
                if projectile.marked_for_deletion || !check_collision(&*projectile, &*enemy) {
                    continue;
                }

                projectile.marked_for_deletion = true;
                let fatal = enemy.take_hit();
                let center = enemy.center();
                self.particles
                    .push(Particle::new(center.x, center.y, &mut self.rng));

                if fatal {
                    burst(&mut self.particles, center, enemy.score, &mut self.rng);
                    enemy.marked_for_deletion = true;
                    spawn_destruction_pair(&mut self.explosions, center, &mut self.rng);
                    self.cues.push(Cue::Explosion);
                    match enemy.tag {
                        Some(EnemyTag::Moon) => grant_power_up = true,
                        Some(EnemyTag::Hive) => {
                            let footprint = enemy.rect();
                            for _ in 0..HIVE_DRONE_COUNT {
                                released.push(Enemy::drone_from(&footprint, &mut self.rng));
                            }
                            log::debug!("Hive destroyed, released {HIVE_DRONE_COUNT} drones");
                        }
                        _ => {}
                    }
                    if !self.game_over {
                        self.score += i64::from(enemy.score);
                    }
                }
            }
            if grant_power_up {
                self.player.enter_power_up(&mut self.ammo, &mut self.cues);
            }
        }

        self.enemies.extend(released);
    }
}

/// Throw `count` particles out of `at`
fn burst<R: Rng + ?Sized>(particles: &mut Vec<Particle>, at: Vec2, count: u32, rng: &mut R) {
    for _ in 0..count {
        particles.push(Particle::new(at.x, at.y, &mut *rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::EnemyKind;
    use crate::tuning::Tuning;

    /// World with the player parked at the bottom, away from test enemies
    fn world() -> World {
        let mut world = World::new(12345);
        world.player.pos.y = 300.0;
        world
    }

    fn parked_enemy(world: &mut World, kind: EnemyKind, x: f32, y: f32) -> usize {
        let mut enemy = Enemy::new(kind, Vec2::new(x, y), &mut world.rng);
        enemy.speed_x = 0.0;
        world.enemies.push(enemy);
        world.enemies.len() - 1
    }

    #[test]
    fn test_ammo_regen_in_update() {
        let mut world = world();
        let start = world.ammo.count();
        let input = TickInput::default();
        // 350ms accumulates, the next tick crosses, the one after pays out
        world.update(&input, 350.0);
        world.update(&input, 1.0);
        assert_eq!(world.ammo.count(), start);
        world.update(&input, 1.0);
        assert_eq!(world.ammo.count(), start + 1.0);
    }

    #[test]
    fn test_spawn_timer() {
        let mut world = world();
        let input = TickInput::default();
        world.update(&input, 2000.0);
        assert!(world.enemies.is_empty());
        world.update(&input, 1.0);
        assert!(world.enemies.is_empty());
        world.update(&input, 1.0);
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.enemy_timer, 0.0);
    }

    #[test]
    fn test_no_spawn_after_game_over() {
        let tuning = Tuning {
            time_limit: 100.0,
            enemy_interval: 10.0,
            ..Default::default()
        };
        let mut world = World::with_tuning(&tuning, 1);
        world.player.pos.y = 300.0;
        let input = TickInput::default();
        world.update(&input, 200.0);
        assert!(world.game_over);
        for _ in 0..50 {
            world.update(&input, 20.0);
        }
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_ramming_costs_a_point() {
        let mut world = World::new(7);
        let player_pos = world.player.pos;
        parked_enemy(&mut world, EnemyKind::Angler1, player_pos.x + 10.0, player_pos.y);
        world.update(&TickInput::default(), 16.0);

        assert_eq!(world.score, -1);
        assert!(world.enemies.is_empty());
        assert!(world.shield.is_active());
        // Angler1 is worth 5 particles
        assert_eq!(world.particles.len(), 5);
        assert!(world.cues.contains(&Cue::Hit));
        assert!(world.cues.contains(&Cue::Shield));
    }

    #[test]
    fn test_ramming_lucky_fish_powers_up() {
        let mut world = World::new(7);
        let player_pos = world.player.pos;
        parked_enemy(&mut world, EnemyKind::LuckyFish, player_pos.x + 10.0, player_pos.y);
        world.update(&TickInput::default(), 16.0);

        assert_eq!(world.score, 0);
        assert!(world.player.power_up);
        assert_eq!(world.ammo.count(), world.ammo.max());
        assert_eq!(world.particles.len(), 15);
        assert!(world.cues.contains(&Cue::PowerUp));
    }

    #[test]
    fn test_shot_damages_without_kill() {
        let mut world = world();
        let idx = parked_enemy(&mut world, EnemyKind::Razorfin, 300.0, 100.0);
        world
            .player
            .projectiles
            .push(crate::sim::Projectile::new(300.0, 150.0));
        world.update(&TickInput::default(), 16.0);

        assert_eq!(world.enemies[idx].lives, 6);
        assert_eq!(world.player.projectiles.len(), 1);
        assert!(world.player.projectiles[0].marked_for_deletion);
        assert_eq!(world.particles.len(), 1);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_moon_fish_kill_powers_up() {
        let mut world = world();
        let idx = parked_enemy(&mut world, EnemyKind::MoonFish, 400.0, 50.0);
        world.enemies[idx].lives = 1;
        world
            .player
            .projectiles
            .push(crate::sim::Projectile::new(450.0, 100.0));
        world.update(&TickInput::default(), 16.0);

        assert!(world.enemies.is_empty());
        assert_eq!(world.score, 10);
        assert!(world.player.power_up);
        assert!(world.cues.contains(&Cue::Explosion));
        // One impact particle plus a ten-particle burst
        assert_eq!(world.particles.len(), 11);
    }

    #[test]
    fn test_one_projectile_one_hit() {
        let mut world = world();
        let a = parked_enemy(&mut world, EnemyKind::BulbWhale, 400.0, 50.0);
        let b = parked_enemy(&mut world, EnemyKind::BulbWhale, 400.0, 50.0);
        world
            .player
            .projectiles
            .push(crate::sim::Projectile::new(450.0, 100.0));
        world.update(&TickInput::default(), 16.0);

        let total = world.enemies[a].lives + world.enemies[b].lives;
        assert_eq!(total, 39, "a projectile is spent on its first hit");
    }

    #[test]
    fn test_debug_toggle() {
        let mut world = world();
        let toggle = TickInput {
            toggle_debug: true,
            ..Default::default()
        };
        world.update(&toggle, 16.0);
        assert!(world.debug);
        world.update(&toggle, 16.0);
        assert!(!world.debug);
    }

    #[test]
    fn test_fire_press_and_auto_fire() {
        let mut world = world();
        let press = TickInput {
            fire_pressed: true,
            fire_held: true,
            ..Default::default()
        };
        world.update(&press, 16.0);
        assert_eq!(world.player.projectiles.len(), 1);

        let hold = TickInput {
            fire_held: true,
            ..Default::default()
        };
        for _ in 0..8 {
            world.update(&hold, 16.0);
        }
        assert_eq!(world.player.projectiles.len(), 2);

        world.auto_fire_enabled = false;
        for _ in 0..30 {
            world.update(&hold, 16.0);
        }
        assert_eq!(world.player.projectiles.len(), 2);
    }

    #[test]
    fn test_vertical_input_moves_player() {
        let mut world = World::new(3);
        let y0 = world.player.pos.y;
        let down = TickInput {
            down: true,
            ..Default::default()
        };
        world.update(&down, 16.0);
        assert_eq!(world.player.pos.y, y0 + 3.0);
        let both = TickInput {
            up: true,
            down: true,
            ..Default::default()
        };
        world.update(&both, 16.0);
        assert_eq!(world.player.pos.y, y0 + 3.0);
    }

    #[test]
    fn test_resize_keeps_entities() {
        let mut world = world();
        let idx = parked_enemy(&mut world, EnemyKind::Stalker, 900.0, 300.0);
        let before = world.enemies[idx].pos;
        world.resize(640.0, 360.0);
        assert_eq!(world.enemies[idx].pos, before);
        assert_eq!(world.player.pos.y, 300.0);
    }
}
