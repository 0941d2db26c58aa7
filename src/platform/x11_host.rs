/// X11 window + Cairo renderer as the frame loop's display surface.

use crate::app::page::Page;
use crate::core::config;
use crate::core::error::PlatformError;
use crate::core::types::keycode;
use crate::platform::renderer::Renderer;
use crate::platform::renderer_cairo::RendererCairo;
use crate::platform::window_x11::WindowX11;
use crate::runtime::frame_loop::FrameHost;
use std::time::Duration;

pub struct X11Host {
    window: WindowX11,
    renderer: RendererCairo,
    frame_interval: Duration,
}

impl X11Host {
    pub fn open(width: i32, height: i32, title: &str) -> Result<Self, PlatformError> {
        let window = WindowX11::create(width, height, title)?;
        let cr = window.create_cairo_context()?;
        Ok(Self {
            window,
            renderer: RendererCairo::new(cr),
            frame_interval: Duration::from_millis(config::FRAME_INTERVAL_MS),
        })
    }
}

impl FrameHost for X11Host {
    fn pump(&mut self, page: &mut Page) -> bool {
        if !self.window.poll_events() {
            return false;
        }

        if self.window.take_resized() {
            page.resize(self.window.width() as f64, self.window.height() as f64);
        }

        for event in self.window.take_mouse_events() {
            if event.pressed && event.button == 1 {
                page.handle_click(event.x, event.y);
            } else if !event.pressed && !event.released {
                page.handle_pointer(event.x, event.y);
            }
        }

        for event in self.window.take_key_events() {
            // Ctrl+Q: quit
            if event.pressed && event.ctrl && event.keycode == keycode::Q {
                return false;
            }
            page.handle_key(&event);
        }

        // Fresh context each frame so the surface tracks the window size
        match self.window.create_cairo_context() {
            Ok(cr) => self.renderer.set_context(cr),
            Err(e) => log::warn!("Keeping previous Cairo context: {}", e),
        }

        true
    }

    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.renderer
    }

    fn present(&mut self) {
        self.window.flush();
    }

    fn wait_for_next_frame(&mut self) {
        // Cap at ~60fps
        std::thread::sleep(self.frame_interval);
    }
}
