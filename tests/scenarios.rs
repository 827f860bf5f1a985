//! End-to-end sessions driven through `World::update`

use std::collections::HashMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use angler_raid::Tuning;
use angler_raid::consts::FRAME_MS;
use angler_raid::renderer::{self, CommandList};
use angler_raid::sim::{Cue, Enemy, EnemyKind, EnemyTag, Outcome, Projectile, TickInput, World};

/// World with the player parked low, clear of enemies placed near the top
fn quiet_world(seed: u64) -> World {
    let mut world = World::new(seed);
    world.player.pos.y = 300.0;
    world
}

/// Stationary one-life enemy with a projectile about to hit it
fn stage_kill(world: &mut World, kind: EnemyKind) {
    let mut enemy = Enemy::new(kind, Vec2::new(600.0, 100.0), &mut world.rng);
    enemy.speed_x = 0.0;
    enemy.lives = 1;
    world.enemies.push(enemy);
    world.player.projectiles.push(Projectile::new(595.0, 150.0));
}

#[test]
fn test_basic_shot_kill() {
    let mut world = quiet_world(42);
    let mut enemy = Enemy::new(EnemyKind::Angler1, Vec2::new(100.0, 100.0), &mut world.rng);
    enemy.size = Vec2::new(50.0, 50.0);
    enemy.speed_x = 0.0;
    enemy.lives = 1;
    world.enemies.push(enemy);
    world.player.projectiles.push(Projectile::new(100.0, 110.0));
    world.update(&TickInput::default(), 16.0);

    assert!(world.enemies.is_empty());
    // Spent projectiles are swept on the player's next update
    assert!(world.player.projectiles[0].marked_for_deletion);
    assert_eq!(world.score, 5);
    // Impact particle plus one per score point
    assert_eq!(world.particles.len(), 6);
    assert!(world.explosions.len() == 0 || world.explosions.len() == 2);
    assert!(world.drain_cues().any(|cue| cue == Cue::Explosion));
}

#[test]
fn test_explosion_pair_is_a_coin_flip() {
    let mut pairs = 0;
    for seed in 0..1000 {
        let mut world = quiet_world(seed);
        stage_kill(&mut world, EnemyKind::Angler1);
        world.update(&TickInput::default(), 16.0);
        match world.explosions.len() {
            0 => {}
            2 => pairs += 1,
            n => panic!("seed {seed}: {n} explosions"),
        }
    }
    assert!((400..=600).contains(&pairs), "{pairs} pairs in 1000 kills");
}

#[test]
fn test_spawn_distribution() {
    let mut rng = Pcg32::seed_from_u64(2024);
    let draws = 100_000;
    let mut counts: HashMap<EnemyKind, usize> = HashMap::new();
    for _ in 0..draws {
        *counts
            .entry(EnemyKind::from_draw(rng.random::<f32>()))
            .or_default() += 1;
    }

    assert_eq!(counts.get(&EnemyKind::Drone), None);
    for kind in EnemyKind::ALL {
        let observed = *counts.get(&kind).unwrap_or(&0) as f32 / draws as f32;
        assert!(
            (observed - kind.spawn_weight()).abs() < 0.01,
            "{kind:?}: observed {observed}, expected {}",
            kind.spawn_weight()
        );
    }
}

#[test]
fn test_surplus_shots_pass_a_destroyed_enemy() {
    let mut world = quiet_world(21);
    stage_kill(&mut world, EnemyKind::Stalker);
    world.enemies[0].lives = 5;
    // Two more shots than the enemy has lives
    for _ in 0..6 {
        world.player.projectiles.push(Projectile::new(595.0, 150.0));
    }
    assert_eq!(world.player.projectiles.len(), 7);
    world.update(&TickInput::default(), 16.0);

    assert!(world.enemies.is_empty());
    let spent = world
        .player
        .projectiles
        .iter()
        .filter(|p| p.marked_for_deletion)
        .count();
    assert_eq!(spent, 5);
    assert_eq!(world.player.projectiles.len() - spent, 2);
    assert_eq!(world.score, 5);
    let explosions = world.drain_cues().filter(|cue| *cue == Cue::Explosion).count();
    assert_eq!(explosions, 1);
}

#[test]
fn test_time_limit_ends_session() {
    let mut world = quiet_world(1);
    world.update(&TickInput::default(), 30_000.0);
    assert!(!world.game_over);
    world.update(&TickInput::default(), 1.0);
    assert!(world.game_over);
    assert_eq!(world.outcome(), Some(Outcome::Lost));

    // Score is frozen but effects still resolve
    stage_kill(&mut world, EnemyKind::Angler1);
    world.update(&TickInput::default(), 16.0);
    assert!(world.enemies.is_empty());
    assert_eq!(world.score, 0);
}

#[test]
fn test_single_long_step_ends_session() {
    let mut world = quiet_world(1);
    world.update(&TickInput::default(), 30_001.0);
    assert!(world.game_over);
}

#[test]
fn test_hive_cascade() {
    let mut world = quiet_world(9);
    stage_kill(&mut world, EnemyKind::HiveWhale);
    world.update(&TickInput::default(), 16.0);

    // The hive moved one pixel left before it died
    let (hx, hy, hw, hh) = (599.0, 100.0, 400.0, 227.0);
    assert_eq!(world.score, 20);
    assert_eq!(world.enemies.len(), 5);
    for drone in &world.enemies {
        assert_eq!(drone.kind, EnemyKind::Drone);
        assert_eq!(drone.tag, Some(EnemyTag::Drone));
        assert!(drone.pos.x >= hx && drone.pos.x < hx + hw, "x {}", drone.pos.x);
        assert!(drone.pos.y >= hy && drone.pos.y < hy + hh * 0.5, "y {}", drone.pos.y);
    }

    // Drones move from the next update on
    let before: Vec<f32> = world.enemies.iter().map(|e| e.pos.x).collect();
    world.update(&TickInput::default(), 16.0);
    for (drone, x) in world.enemies.iter().zip(before) {
        assert!(drone.pos.x < x);
    }
}

#[test]
fn test_resize_round_trip() {
    let mut world = quiet_world(3);
    stage_kill(&mut world, EnemyKind::Stalker);
    world.enemies[0].lives = 5;
    let enemy_pos = world.enemies[0].pos;

    world.resize(800.0, 300.0);
    assert_eq!(world.enemies[0].pos, enemy_pos);

    // New spawns enter at the new right edge, inside the new band
    world.enemy_timer = world.enemy_interval + 1.0;
    world.enemies.clear();
    world.update(&TickInput::default(), 16.0);
    let spawned = world.enemies.last().expect("spawned");
    assert_eq!(spawned.pos.x, 800.0);
    assert!(spawned.pos.y <= (300.0 * 0.95 - spawned.size.y).max(0.0));

    world.resize(1500.0, 500.0);
    assert_eq!((world.width, world.height), (1500.0, 500.0));
}

/// Scripted pilot: fire held, sweeping up and down each second
fn scripted_input(frame: u32) -> TickInput {
    let sweeping_down = (frame / 60) % 2 == 0;
    TickInput {
        up: !sweeping_down,
        down: sweeping_down,
        fire_pressed: frame == 0,
        fire_held: true,
        toggle_debug: false,
    }
}

#[test]
fn test_session_invariants_hold() {
    let tuning = Tuning {
        enemy_interval: 300.0,
        ..Default::default()
    };
    let mut world = World::with_tuning(&tuning, 77);
    let mut surface = CommandList::default();

    for frame in 0..2400 {
        world.update(&scripted_input(frame), FRAME_MS);

        assert!(world.ammo.count() >= 0.0 && world.ammo.count() <= world.ammo.max());
        let half = world.player.size.y * 0.5;
        assert!(world.player.pos.y >= -half && world.player.pos.y <= world.height - half);
        for enemy in &world.enemies {
            assert!(enemy.lives <= enemy.kind.stats().lives);
            assert!(!enemy.marked_for_deletion);
        }
        assert!(world.particles.iter().all(|p| !p.marked_for_deletion));
        assert!(world.explosions.iter().all(|e| !e.marked_for_deletion));

        surface.clear_commands();
        renderer::draw(&world, &mut surface);
        assert_eq!(surface.depth(), 0);
        world.drain_cues().for_each(drop);
    }

    assert!(world.game_over);
    let frozen = world.score;
    for frame in 0..120 {
        world.update(&scripted_input(frame), FRAME_MS);
    }
    assert_eq!(world.score, frozen);
}

#[test]
fn test_same_seed_same_session() {
    let run = |seed| {
        let mut world = World::new(seed);
        for frame in 0..1200 {
            world.update(&scripted_input(frame), FRAME_MS);
        }
        (world.score, world.enemies.len(), world.particles.len())
    };
    assert_eq!(run(5), run(5));
}
