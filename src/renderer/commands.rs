//! Recording surface
//!
//! Captures draw calls instead of rasterizing them. Used by the headless
//! runner and by tests that assert on what a frame would paint.

use super::{Color, SpriteId, Surface, TextStyle};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Sprite { sprite: SpriteId, src: Rect, dst: Rect },
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    Text { text: String, x: f32, y: f32, style: TextStyle },
    Save,
    Translate { x: f32, y: f32 },
    Rotate { angle: f32 },
    Restore,
}

/// Surface that records every call in order
#[derive(Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl CommandList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of sprite blits recorded
    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Sprite { .. }))
            .count()
    }

    /// Drop the recording, keeping the allocation
    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.depth = 0;
    }
}

impl Surface for CommandList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn draw_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Sprite { sprite, src, dst });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate { angle });
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }
}
