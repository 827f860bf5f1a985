//! Canvas 2D surface
//!
//! Sprite sheets are `<img>` elements in the page whose ids match
//! `SpriteId::name()`. Missing images are skipped.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::renderer::{Color, SpriteId, Surface, TextStyle};
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    document: Document,
    images: HashMap<SpriteId, Option<HtmlImageElement>>,
}

impl CanvasSurface {
    /// Wrap the canvas' 2D context; `None` if the context is unavailable
    pub fn new(canvas: &HtmlCanvasElement, document: Document) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            document,
            images: HashMap::new(),
        })
    }

    fn image(&mut self, sprite: SpriteId) -> Option<HtmlImageElement> {
        let document = &self.document;
        self.images
            .entry(sprite)
            .or_insert_with(|| {
                let image = document
                    .get_element_by_id(sprite.name())
                    .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
                if image.is_none() {
                    log::warn!("Sprite sheet #{} not found", sprite.name());
                }
                image
            })
            .clone()
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect) {
        let Some(image) = self.image(sprite) else { return };
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &image,
                src.x() as f64,
                src.y() as f64,
                src.width() as f64,
                src.height() as f64,
                dst.x() as f64,
                dst.y() as f64,
                dst.width() as f64,
                dst.height() as f64,
            );
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.x() as f64,
            rect.y() as f64,
            rect.width() as f64,
            rect.height() as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke_rect(
            rect.x() as f64,
            rect.y() as f64,
            rect.width() as f64,
            rect.height() as f64,
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_font(&style.font());
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_fill_style_str(&style.color.to_css());
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, x: f32, y: f32) {
        let _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
