/// Cairo-based renderer implementation.

use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use cairo::{Context, FontSlant, FontWeight, Operator};
use std::f64::consts::PI;

const FONT_FACE: &str = "sans-serif";

pub struct RendererCairo {
    cr: Context,
}

impl RendererCairo {
    pub fn new(cr: Context) -> Self {
        Self { cr }
    }

    /// Update the Cairo context (e.g., after window resize).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_font(&self, size: f64) {
        self.cr
            .select_font_face(FONT_FACE, FontSlant::Normal, FontWeight::Bold);
        self.cr.set_font_size(size);
    }

    fn circle_path(&self, cx: f64, cy: f64, radius: f64) {
        self.cr.new_path();
        self.cr.arc(cx, cy, radius.max(0.0), 0.0, 2.0 * PI);
    }

    fn rounded_rect_path(&self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        self.cr.new_path();
        self.cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
        self.cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
        self.cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
        self.cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
        self.cr.close_path();
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
    }

    fn end_frame(&mut self) {
        self.cr.restore().ok();
    }

    fn clear(&self, color: Color) {
        self.cr.save().ok();
        self.cr.set_operator(Operator::Source);
        self.set_color(color);
        self.cr.paint().ok();
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.rounded_rect_path(x, y, w, h, radius);
        self.cr.fill().ok();
    }

    fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        line_width: f64,
    ) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.rounded_rect_path(x, y, w, h, radius);
        self.cr.stroke().ok();
    }

    fn stroke_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke().ok();
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.circle_path(cx, cy, radius);
        self.cr.fill().ok();
    }

    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.circle_path(cx, cy, radius);
        self.cr.stroke().ok();
    }

    fn fill_crescent(&self, center: Vec2, radius: f64, cutout: Vec2, cutout_radius: f64, color: Color) {
        // Punch the cut-out inside an offscreen group so DEST_OUT only erases
        // the moon, not the sky already painted on the window.
        self.cr.push_group();
        self.set_color(color);
        self.circle_path(center.x, center.y, radius);
        self.cr.fill().ok();

        self.cr.set_operator(Operator::DestOut);
        self.cr.set_source_rgba(0.0, 0.0, 0.0, 1.0);
        self.circle_path(cutout.x, cutout.y, cutout_radius);
        self.cr.fill().ok();
        self.cr.set_operator(Operator::Over);

        if self.cr.pop_group_to_source().is_ok() {
            self.cr.paint().ok();
        }
    }

    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.set_font(size);
        self.cr.move_to(x, y + size);
        self.cr.show_text(text).ok();
    }

    fn text_width(&self, text: &str, size: f64) -> f64 {
        self.set_font(size);
        self.cr
            .text_extents(text)
            .map(|ext| ext.x_advance())
            .unwrap_or(text.chars().count() as f64 * size * 0.6)
    }
}
