//! Per-entity sprite drawing

use super::{Color, SpriteId, Surface, TextAlign, TextStyle};
use crate::consts::PARTICLE_SPRITE_SIZE;
use crate::sim::{Enemy, Explosion, Hitbox, Layer, Particle, Player, Projectile, Rect, Shield};

/// Sheet cell at column `frame`, row `row`, for a sprite of `w`x`h`
fn cell(frame: u32, row: u32, w: f32, h: f32) -> Rect {
    Rect::new(frame as f32 * w, row as f32 * h, w, h)
}

/// Layer strip, tiled twice so the wrap is seamless
pub fn layer<S: Surface + ?Sized>(layer: &Layer, surface: &mut S) {
    let sprite = SpriteId::for_layer(layer.index);
    let src = Rect::new(0.0, 0.0, layer.width, layer.height);
    surface.draw_sprite(sprite, src, Rect::new(layer.x, layer.y, layer.width, layer.height));
    surface.draw_sprite(
        sprite,
        src,
        Rect::new(layer.x + layer.width, layer.y, layer.width, layer.height),
    );
}

pub fn projectile<S: Surface + ?Sized>(projectile: &Projectile, surface: &mut S) {
    let src = cell(projectile.animation.frame, 0, projectile.size.x, projectile.size.y);
    surface.draw_sprite(SpriteId::Projectile, src, projectile.rect());
}

/// Player with its projectiles
pub fn player<S: Surface + ?Sized>(player: &Player, debug: bool, surface: &mut S) {
    if debug {
        surface.stroke_rect(player.rect(), Color::BLACK);
    }
    for p in &player.projectiles {
        projectile(p, surface);
    }
    let src = cell(player.animation.frame, player.frame_row, player.size.x, player.size.y);
    surface.draw_sprite(SpriteId::Player, src, player.rect());
}

/// Shield flash over the player
pub fn shield<S: Surface + ?Sized>(shield: &Shield, player: &Player, surface: &mut S) {
    let src = cell(shield.animation.frame, 0, player.size.x, player.size.y);
    surface.draw_sprite(SpriteId::Shield, src, player.rect());
}

/// Gear debris, rotated around its centre
pub fn particle<S: Surface + ?Sized>(particle: &Particle, surface: &mut S) {
    let (col, row) = particle.cell;
    let half = particle.size * 0.5;
    surface.save();
    surface.translate(particle.pos.x, particle.pos.y);
    surface.rotate(particle.angle);
    surface.draw_sprite(
        SpriteId::Gears,
        cell(col, row, PARTICLE_SPRITE_SIZE, PARTICLE_SPRITE_SIZE),
        Rect::new(-half, -half, particle.size, particle.size),
    );
    surface.restore();
}

pub fn enemy<S: Surface + ?Sized>(enemy: &Enemy, debug: bool, surface: &mut S) {
    let rect = enemy.rect();
    if debug {
        surface.stroke_rect(rect, Color::BLACK);
        let style = TextStyle::new(20.0, TextAlign::Left);
        surface.draw_text(&enemy.lives.to_string(), rect.x(), rect.y(), &style);
    }
    let src = cell(enemy.animation.frame, enemy.frame_row, enemy.size.x, enemy.size.y);
    surface.draw_sprite(SpriteId::for_enemy(enemy.kind), src, rect);
}

pub fn explosion<S: Surface + ?Sized>(explosion: &Explosion, surface: &mut S) {
    let src = cell(explosion.animation.frame, 0, explosion.size.x, explosion.size.y);
    surface.draw_sprite(
        SpriteId::for_explosion(explosion.kind),
        src,
        Rect::from_pos_size(explosion.pos, explosion.size),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandList, DrawCommand};
    use crate::sim::{EnemyKind, ExplosionKind};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_layer_tiles_twice() {
        let mut strip = Layer::new(2, 0.4);
        strip.x = -100.0;
        let mut commands = CommandList::default();
        layer(&strip, &mut commands);
        let dsts: Vec<f32> = commands
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Sprite { dst, .. } => Some(dst.x()),
                _ => None,
            })
            .collect();
        assert_eq!(dsts, vec![-100.0, 1668.0]);
    }

    #[test]
    fn test_enemy_sheet_cell() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fish = Enemy::new(EnemyKind::Angler2, Vec2::new(10.0, 20.0), &mut rng);
        fish.animation.frame = 4;
        fish.frame_row = 1;
        let mut commands = CommandList::default();
        enemy(&fish, false, &mut commands);
        assert_eq!(
            commands.commands(),
            &[DrawCommand::Sprite {
                sprite: SpriteId::Angler2,
                src: Rect::new(4.0 * 213.0, 165.0, 213.0, 165.0),
                dst: Rect::new(10.0, 20.0, 213.0, 165.0),
            }]
        );
    }

    #[test]
    fn test_enemy_debug_overlay() {
        let mut rng = Pcg32::seed_from_u64(1);
        let fish = Enemy::new(EnemyKind::Razorfin, Vec2::new(0.0, 0.0), &mut rng);
        let mut commands = CommandList::default();
        enemy(&fish, true, &mut commands);
        assert!(matches!(commands.commands()[0], DrawCommand::StrokeRect { .. }));
        assert!(
            matches!(&commands.commands()[1], DrawCommand::Text { text, .. } if text == "7")
        );
    }

    #[test]
    fn test_particle_transform_is_balanced() {
        let mut rng = Pcg32::seed_from_u64(9);
        let gear = Particle::new(50.0, 60.0, &mut rng);
        let mut commands = CommandList::default();
        particle(&gear, &mut commands);
        assert_eq!(commands.commands()[0], DrawCommand::Save);
        assert_eq!(commands.commands()[1], DrawCommand::Translate { x: 50.0, y: 60.0 });
        assert_eq!(commands.commands().last(), Some(&DrawCommand::Restore));
        assert_eq!(commands.depth(), 0);
    }

    #[test]
    fn test_explosion_cell_follows_frame() {
        let mut boom = Explosion::new(ExplosionKind::Smoke, Vec2::new(100.0, 100.0));
        boom.animation.frame = 3;
        let mut commands = CommandList::default();
        explosion(&boom, &mut commands);
        match &commands.commands()[0] {
            DrawCommand::Sprite { sprite, src, dst } => {
                assert_eq!(*sprite, SpriteId::SmokeExplosion);
                assert_eq!(src.x(), 600.0);
                assert_eq!(dst.x(), 0.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
