/// Abstract rendering interface.

use crate::core::types::{Color, Vec2};

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    /// Paint the whole surface with `color`.
    fn clear(&self, color: Color);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color);
    fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        line_width: f64,
    );
    fn stroke_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64);

    // Disks
    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color);
    fn stroke_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, line_width: f64);

    /// Disk at `center` with a second disk at `cutout` removed from it.
    /// Only the crescent is painted; what lies under the cut-out stays visible.
    fn fill_crescent(&self, center: Vec2, radius: f64, cutout: Vec2, cutout_radius: f64, color: Color);

    // Text (y is the top of the line box)
    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color);
    fn text_width(&self, text: &str, size: f64) -> f64;
}
