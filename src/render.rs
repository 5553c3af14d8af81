use crate::constants::{BACKGROUND_COLOR, FONT_FAMILY, FONT_WEIGHT, TEXT_COLOR};
use crate::dom;
use crate::input;
use void_core::{RenderItem, Viewport, BASE_FONT_PX, LINE_HEIGHT};
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas the visible entities are drawn onto each frame.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext('2d'): {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let dpr = dom::sync_canvas_backing_size(&canvas);
        Ok(Self { canvas, ctx, dpr })
    }

    pub fn viewport(&self) -> Viewport {
        dom::canvas_viewport(&self.canvas)
    }

    /// Re-sync the backing store after a layout change.
    pub fn resize(&mut self) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas);
    }

    pub fn draw(&self, viewport: Viewport, items: &[RenderItem]) {
        let ctx = &self.ctx;
        // Draw in CSS pixels; the transform maps to device pixels
        if let Err(e) = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0) {
            log::error!("setTransform: {:?}", e);
            return;
        }
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_text_baseline("top");
        let mut current_font = String::new();
        for item in items {
            let font = input::css_font(item.font_size, BASE_FONT_PX, FONT_WEIGHT, FONT_FAMILY);
            if font != current_font {
                ctx.set_font(&font);
                current_font = font;
            }
            let line_advance = (item.font_size * BASE_FONT_PX * LINE_HEIGHT) as f64;
            let x = item.screen_position.x as f64;
            let top = item.screen_position.y as f64;
            for (i, line) in item.lines.iter().enumerate() {
                let y = top + i as f64 * line_advance;
                if y > viewport.height as f64 {
                    break;
                }
                _ = ctx.fill_text_with_max_width(line, x, y, item.size.x as f64);
            }
        }
    }
}
