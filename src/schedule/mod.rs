pub mod chapter_path;
pub mod navigator;
pub mod schedule_config;
pub mod unlock;
