pub mod notice;
pub mod page;
