/// X11 window implementation with Cairo surface.

use crate::core::error::PlatformError;
use crate::core::types::{KeyEvent, MouseEvent};
use std::ffi::CString;
use std::ptr;
use x11::xlib;

pub struct WindowX11 {
    display: *mut xlib::Display,
    window: xlib::Window,
    width: i32,
    height: i32,
    wm_delete_window: xlib::Atom,
    should_close: bool,
    screen: i32,
    resized: bool,

    // Pending events for external consumption
    pending_mouse_events: Vec<MouseEvent>,
    pending_key_events: Vec<KeyEvent>,
}

impl WindowX11 {
    /// Open the display and map a window of the given size.
    pub fn create(width: i32, height: i32, title: &str) -> Result<Self, PlatformError> {
        let title_c = CString::new(title).map_err(|_| PlatformError::InvalidTitle)?;
        let wm_delete = c"WM_DELETE_WINDOW";

        unsafe {
            let display = xlib::XOpenDisplay(ptr::null());
            if display.is_null() {
                return Err(PlatformError::NoDisplay);
            }

            let screen = xlib::XDefaultScreen(display);
            let root = xlib::XRootWindow(display, screen);

            let window = xlib::XCreateSimpleWindow(
                display,
                root,
                0,
                0,
                width as u32,
                height as u32,
                0,
                xlib::XBlackPixel(display, screen),
                xlib::XBlackPixel(display, screen),
            );

            xlib::XStoreName(display, window, title_c.as_ptr());

            xlib::XSelectInput(
                display,
                window,
                xlib::ExposureMask
                    | xlib::ButtonPressMask
                    | xlib::ButtonReleaseMask
                    | xlib::PointerMotionMask
                    | xlib::KeyPressMask
                    | xlib::StructureNotifyMask,
            );

            // WM_DELETE_WINDOW protocol
            let mut wm_delete_window = xlib::XInternAtom(display, wm_delete.as_ptr(), xlib::False);
            xlib::XSetWMProtocols(display, window, &mut wm_delete_window as *mut _, 1);

            xlib::XMapWindow(display, window);
            xlib::XFlush(display);

            log::info!("Opened {}x{} window '{}'", width, height, title);

            Ok(Self {
                display,
                window,
                width,
                height,
                wm_delete_window,
                should_close: false,
                screen,
                resized: true,
                pending_mouse_events: Vec::new(),
                pending_key_events: Vec::new(),
            })
        }
    }

    /// Create a Cairo context for the current window size using cairo-sys FFI.
    pub fn create_cairo_context(&self) -> Result<cairo::Context, PlatformError> {
        unsafe {
            let visual = xlib::XDefaultVisual(self.display, self.screen);

            let surface_ptr = cairo_sys::cairo_xlib_surface_create(
                self.display,
                self.window,
                visual,
                self.width,
                self.height,
            );

            if surface_ptr.is_null() {
                return Err(PlatformError::CairoContext);
            }

            let cr_ptr = cairo_sys::cairo_create(surface_ptr);
            // Surface is now referenced by the context, release our ref
            cairo_sys::cairo_surface_destroy(surface_ptr);

            if cr_ptr.is_null() {
                return Err(PlatformError::CairoContext);
            }

            // Wrap the raw pointer in cairo-rs Context (takes ownership)
            Ok(cairo::Context::from_raw_full(cr_ptr))
        }
    }

    /// Process pending X11 events. Returns false if window should close.
    pub fn poll_events(&mut self) -> bool {
        if self.should_close {
            return false;
        }

        self.pending_mouse_events.clear();
        self.pending_key_events.clear();

        unsafe {
            while xlib::XPending(self.display) > 0 {
                let mut event: xlib::XEvent = std::mem::zeroed();
                xlib::XNextEvent(self.display, &mut event);

                match event.get_type() {
                    xlib::ButtonPress | xlib::ButtonRelease => {
                        let btn = event.button;
                        // 4/5 are wheel steps
                        if btn.button < 4 {
                            let pressed = event.get_type() == xlib::ButtonPress;
                            self.pending_mouse_events.push(MouseEvent {
                                x: btn.x as f64,
                                y: btn.y as f64,
                                button: btn.button as u8,
                                pressed,
                                released: !pressed,
                            });
                        }
                    }
                    xlib::MotionNotify => {
                        let motion = event.motion;
                        self.pending_mouse_events.push(MouseEvent {
                            x: motion.x as f64,
                            y: motion.y as f64,
                            ..MouseEvent::default()
                        });
                    }
                    xlib::KeyPress => {
                        let key = event.key;
                        self.pending_key_events.push(KeyEvent {
                            keycode: key.keycode,
                            pressed: true,
                            ctrl: key.state & xlib::ControlMask != 0,
                        });
                    }
                    xlib::ConfigureNotify => {
                        let configure = event.configure;
                        if configure.width != self.width || configure.height != self.height {
                            log::debug!(
                                "Window resized {}x{} -> {}x{}",
                                self.width,
                                self.height,
                                configure.width,
                                configure.height
                            );
                            self.width = configure.width;
                            self.height = configure.height;
                            self.resized = true;
                        }
                    }
                    xlib::ClientMessage => {
                        let cm = event.client_message;
                        if cm.data.get_long(0) as xlib::Atom == self.wm_delete_window {
                            self.should_close = true;
                            return false;
                        }
                    }
                    _ => {}
                }
            }
        }

        !self.should_close
    }

    /// True once after every size change (and after creation).
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    /// Drain pending mouse events.
    pub fn take_mouse_events(&mut self) -> Vec<MouseEvent> {
        std::mem::take(&mut self.pending_mouse_events)
    }

    /// Drain pending key events.
    pub fn take_key_events(&mut self) -> Vec<KeyEvent> {
        std::mem::take(&mut self.pending_key_events)
    }

    pub fn flush(&self) {
        unsafe {
            xlib::XFlush(self.display);
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Drop for WindowX11 {
    fn drop(&mut self) {
        unsafe {
            if !self.display.is_null() {
                xlib::XDestroyWindow(self.display, self.window);
                xlib::XCloseDisplay(self.display);
            }
        }
    }
}
