/// Render loop: one page tick and one redraw per display frame.

use crate::app::page::Page;
use crate::platform::renderer::Renderer;
use crate::runtime::clock::Clock;

/// The display surface driving the loop.
pub trait FrameHost {
    /// Deliver pending input and size changes to the page.
    /// Returns false once the surface has been closed.
    fn pump(&mut self, page: &mut Page) -> bool;

    fn renderer(&mut self) -> &mut dyn Renderer;

    /// Make the frame just drawn visible.
    fn present(&mut self);

    /// Block until the next display refresh.
    fn wait_for_next_frame(&mut self);
}

pub struct FrameLoop<C: Clock> {
    clock: C,
    frames: u64,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, frames: 0 }
    }

    /// Run exactly one frame.
    pub fn step(&mut self, page: &mut Page, renderer: &mut dyn Renderer) {
        page.tick(self.clock.now());

        let (w, h) = page.size();
        renderer.begin_frame(w as i32, h as i32);
        page.render(&*renderer);
        renderer.end_frame();

        self.frames += 1;
    }

    /// Run frames until the host closes. Returns the number of frames drawn.
    pub fn run(&mut self, page: &mut Page, host: &mut dyn FrameHost) -> u64 {
        while host.pump(page) {
            self.step(page, host.renderer());
            host.present();
            host.wait_for_next_frame();
        }
        log::info!("Frame loop stopped after {} frames", self.frames);
        self.frames
    }
}
