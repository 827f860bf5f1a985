//! Canvas 2D rendering module
//!
//! The scene is expressed as calls on a [`Surface`]: sprite blits from named
//! sheets, filled and stroked rectangles, and text. The browser host backs it
//! with a `CanvasRenderingContext2d`; headless runs and tests record the
//! calls into a [`CommandList`].

pub mod commands;
pub mod hud;
pub mod sprites;

pub use commands::{CommandList, DrawCommand};

use crate::sim::{EnemyKind, ExplosionKind, Rect, World};

// ============================================================================
// SURFACE CONTRACT
// ============================================================================

/// Drawing target for one frame
pub trait Surface {
    /// Wipe the whole viewport
    fn clear(&mut self, width: f32, height: f32);
    /// Blit the `src` cell of a sprite sheet into `dst`
    fn draw_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
    /// Push the current transform
    fn save(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate by `angle` radians
    fn rotate(&mut self, angle: f32);
    /// Pop the transform pushed by the matching `save`
    fn restore(&mut self);
}

/// Logical sprite sheet handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    Projectile,
    Gears,
    Shield,
    SmokeExplosion,
    FireExplosion,
    Angler1,
    Angler2,
    Lucky,
    HiveWhale,
    Drone,
    BulbWhale,
    MoonFish,
    Stalker,
    Razorfin,
    Layer1,
    Layer2,
    Layer3,
    Layer4,
}

impl SpriteId {
    /// Stable name of the sheet (the image element id in the browser)
    pub fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Projectile => "projectile",
            Self::Gears => "gears",
            Self::Shield => "shield",
            Self::SmokeExplosion => "smokeExplosion",
            Self::FireExplosion => "fireExplosion",
            Self::Angler1 => "angler1",
            Self::Angler2 => "angler2",
            Self::Lucky => "lucky",
            Self::HiveWhale => "hivewhale",
            Self::Drone => "drone",
            Self::BulbWhale => "bulbwhale",
            Self::MoonFish => "moonfish",
            Self::Stalker => "stalker",
            Self::Razorfin => "razorfin",
            Self::Layer1 => "layer1",
            Self::Layer2 => "layer2",
            Self::Layer3 => "layer3",
            Self::Layer4 => "layer4",
        }
    }

    pub fn for_enemy(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Angler1 => Self::Angler1,
            EnemyKind::Angler2 => Self::Angler2,
            EnemyKind::LuckyFish => Self::Lucky,
            EnemyKind::HiveWhale => Self::HiveWhale,
            EnemyKind::Drone => Self::Drone,
            EnemyKind::BulbWhale => Self::BulbWhale,
            EnemyKind::MoonFish => Self::MoonFish,
            EnemyKind::Stalker => Self::Stalker,
            EnemyKind::Razorfin => Self::Razorfin,
        }
    }

    pub fn for_explosion(kind: ExplosionKind) -> Self {
        match kind {
            ExplosionKind::Smoke => Self::SmokeExplosion,
            ExplosionKind::Fire => Self::FireExplosion,
        }
    }

    /// Background layer sheet; indices outside 1-3 map to the foreground
    pub fn for_layer(index: u8) -> Self {
        match index {
            1 => Self::Layer1,
            2 => Self::Layer2,
            3 => Self::Layer3,
            _ => Self::Layer4,
        }
    }
}

// ============================================================================
// STYLE
// ============================================================================

/// 8-bit RGB color with float alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Ammo bars while powered up (#ffffbd)
    pub const POWERED: Color = Color::rgb(0xff, 0xff, 0xbd);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS color string for the canvas API
    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub family: &'static str,
    pub align: TextAlign,
    pub color: Color,
}

impl TextStyle {
    pub fn new(size: f32, align: TextAlign) -> Self {
        Self {
            size,
            family: "Bangers",
            align,
            color: Color::WHITE,
        }
    }

    /// CSS font shorthand, e.g. `25px Bangers`
    pub fn font(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

// ============================================================================
// FRAME
// ============================================================================

/// Draw one frame, back to front
pub fn draw<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    surface.clear(world.width, world.height);

    for layer in &world.background.layers {
        sprites::layer(layer, surface);
    }
    hud::draw(world, surface);
    sprites::player(&world.player, world.debug, surface);
    if world.shield.is_active() {
        sprites::shield(&world.shield, &world.player, surface);
    }
    for particle in &world.particles {
        sprites::particle(particle, surface);
    }
    for enemy in &world.enemies {
        sprites::enemy(enemy, world.debug, surface);
    }
    for explosion in &world.explosions {
        sprites::explosion(explosion, surface);
    }
    sprites::layer(&world.background.foreground, surface);
}
