//! Parallax background layers

use super::entity::FrameContext;
use crate::consts::*;

/// One horizontally tiling strip
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Index of the layer image (1-4)
    pub index: u8,
    pub speed_modifier: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Layer {
    pub fn new(index: u8, speed_modifier: f32) -> Self {
        Self {
            index,
            speed_modifier,
            x: 0.0,
            y: 0.0,
            width: LAYER_WIDTH,
            height: LAYER_HEIGHT,
        }
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        if self.x <= -self.width {
            self.x = 0.0;
        }
        self.x -= ctx.speed * self.speed_modifier;
    }
}

/// Three backdrop layers plus a foreground strip drawn over everything
#[derive(Debug, Clone)]
pub struct Background {
    pub layers: [Layer; 3],
    pub foreground: Layer,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            layers: [Layer::new(1, 0.2), Layer::new(2, 0.4), Layer::new(3, 1.0)],
            foreground: Layer::new(4, 1.5),
        }
    }
}

impl Background {
    pub fn update(&mut self, ctx: &FrameContext) {
        for layer in &mut self.layers {
            layer.update(ctx);
        }
        self.foreground.update(ctx);
    }
}
