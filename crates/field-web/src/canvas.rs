use field_core::{GradientStop, Hsla, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` backed by a Canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    fn disc_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(_) => return,
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.disc_path(center, radius);
        self.ctx.fill();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.disc_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
