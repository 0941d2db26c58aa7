/// Modal informational notice shown over the page until dismissed.

use crate::core::animation::Animation;
use crate::core::config;
use crate::core::types::Color;
use crate::platform::renderer::Renderer;

#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    fade: Animation,
}

impl Notice {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            fade: Animation::started(config::NOTICE_FADE_MS),
        }
    }

    pub fn update(&mut self, dt_ms: f64) {
        self.fade.update(dt_ms);
    }

    pub fn render(&self, renderer: &dyn Renderer, width: f64, height: f64) {
        let t = self.fade.progress();

        // Dim the page behind the box
        renderer.fill_rect(0.0, 0.0, width, height, Color::from_hex(config::BG_COLOR, 0.55 * t));

        let w = config::NOTICE_W.min(width - 20.0).max(0.0);
        let h = config::NOTICE_H;
        let x = (width - w) / 2.0;
        let y = (height - h) / 2.0 + 12.0 * (1.0 - t);
        let r = config::NOTICE_CORNER_RADIUS;

        renderer.fill_rounded_rect(x, y, w, h, r, Color::from_hex(config::NOTICE_BG, 0.95 * t));
        renderer.stroke_rounded_rect(
            x,
            y,
            w,
            h,
            r,
            Color::from_hex(config::NOTICE_BORDER, t),
            1.5,
        );

        let size = config::NOTICE_FONT_SIZE;
        let msg_w = renderer.text_width(&self.message, size);
        renderer.draw_text(
            x + (w - msg_w) / 2.0,
            y + h * 0.3,
            &self.message,
            size,
            Color::from_hex(config::TEXT_PRIMARY, t),
        );

        let hint_size = size * 0.7;
        let hint_w = renderer.text_width(config::MSG_NOTICE_HINT, hint_size);
        renderer.draw_text(
            x + (w - hint_w) / 2.0,
            y + h * 0.65,
            config::MSG_NOTICE_HINT,
            hint_size,
            Color::from_hex(config::TEXT_SECONDARY, t),
        );
    }
}

#[cfg(test)]
impl Notice {
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::renderer::recording::{DrawCommand, RecordingRenderer};

    #[test]
    fn test_notice_fades_in() {
        let mut notice = Notice::new(config::MSG_NODE_LOCKED);
        let renderer = RecordingRenderer::new();

        notice.render(&renderer, 800.0, 600.0);
        let first = renderer.take();
        match &first[0] {
            DrawCommand::Rect { color, .. } => assert_eq!(color.a, 0.0),
            other => panic!("expected backdrop, got {:?}", other),
        }

        notice.update(config::NOTICE_FADE_MS);
        notice.render(&renderer, 800.0, 600.0);
        match &renderer.take()[0] {
            DrawCommand::Rect { color, .. } => assert!((color.a - 0.55).abs() < 1e-9),
            other => panic!("expected backdrop, got {:?}", other),
        }
    }

    #[test]
    fn test_notice_draws_message_and_hint() {
        let notice = Notice::new("This moment hasn't arrived yet ✨");
        let renderer = RecordingRenderer::new();
        notice.render(&renderer, 800.0, 600.0);
        assert_eq!(
            renderer.texts(),
            vec!["This moment hasn't arrived yet ✨", config::MSG_NOTICE_HINT]
        );
    }
}
