pub mod clock;
pub mod frame_loop;
pub mod ticker;
