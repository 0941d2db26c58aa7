pub mod renderer;
pub mod renderer_cairo;
pub mod window_x11;
pub mod x11_host;
