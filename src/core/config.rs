/// Visual and behavioral constants.

// --- Visual colors (hex) ---
pub const BG_COLOR: u32 = 0x0B1026;
pub const STAR_COLOR: u32 = 0xFFFFFF;
pub const MOON_COLOR: u32 = 0xF5F3CE;
pub const NODE_LOCKED_BG: u32 = 0x1C2340;
pub const NODE_LOCKED_BORDER: u32 = 0x3A4466;
pub const NODE_UNLOCKED_BG: u32 = 0xF5F3CE;
pub const NODE_UNLOCKED_GLOW: u32 = 0xFFE9A8;
pub const PATH_COLOR: u32 = 0x3A4466;
pub const TEXT_PRIMARY: u32 = 0xE6EDF3;
pub const TEXT_DARK: u32 = 0x0B1026;
pub const TEXT_SECONDARY: u32 = 0x8B949E;
pub const NOTICE_BG: u32 = 0x161B22;
pub const NOTICE_BORDER: u32 = 0xFFE9A8;

// --- Schedule defaults ---
pub const DEFAULT_TOTAL_NODES: usize = 20;
pub const DEFAULT_START: &str = "2026-02-03T15:00:00Z";
pub const DEFAULT_UNLOCK_INTERVAL: &str = "2h";
pub const DEFAULT_LINK_TEMPLATE: &str = "chapters/chapter{n}.html";

// --- Refresh periods ---
pub const COUNTDOWN_REFRESH_MS: i64 = 1_000;
pub const NODE_REFRESH_MS: i64 = 10_000;
pub const FRAME_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_DT_MS: f64 = 100.0;

// --- Messages ---
pub const MSG_UNLOCKING_NOW: &str = "Next drop unlocking now! ✨";
pub const MSG_COUNTDOWN_PREFIX: &str = "Next drop in:";
pub const MSG_ALL_UNLOCKED: &str = "All chapters unlocked ✨";
pub const MSG_NODE_LOCKED: &str = "This moment hasn't arrived yet ✨";
pub const MSG_OPEN_FAILED: &str = "Couldn't open that chapter";
pub const MSG_NOTICE_HINT: &str = "click or press Esc to close";

// --- Starfield ---
pub const DEFAULT_STAR_COUNT: usize = 150;
pub const STAR_MAX_RADIUS: f64 = 1.5;
pub const STAR_MAX_SPEED: f64 = 0.2;

// --- Moon (ratios of the viewport) ---
pub const MOON_X_RATIO: f64 = 0.8;
pub const MOON_Y_RATIO: f64 = 0.2;
pub const MOON_R_RATIO: f64 = 0.06;
pub const MOON_CUTOUT_DX: f64 = -0.3;
pub const MOON_CUTOUT_DY: f64 = -0.2;

// --- Chapter path ---
pub const NODE_RADIUS: f64 = 26.0;
pub const NODES_PER_ROW: usize = 5;
pub const NODE_GAP_X: f64 = 110.0;
pub const NODE_GAP_Y: f64 = 100.0;
pub const NODE_FONT_SIZE: f64 = 16.0;
pub const HOVER_GLOW_GROW: f64 = 10.0;
pub const HOVER_SPEED: f64 = 10.0;
pub const UNLOCK_BLOOM_MS: f64 = 1_200.0;
pub const PATH_TOP: f64 = 80.0;

// --- Countdown ---
pub const COUNTDOWN_FONT_SIZE: f64 = 22.0;
pub const COUNTDOWN_TOP: f64 = 36.0;

// --- Notice ---
pub const NOTICE_W: f64 = 420.0;
pub const NOTICE_H: f64 = 120.0;
pub const NOTICE_CORNER_RADIUS: f64 = 10.0;
pub const NOTICE_FADE_MS: f64 = 180.0;
pub const NOTICE_FONT_SIZE: f64 = 16.0;

// --- Window ---
pub const WINDOW_TITLE: &str = "Chapters";
pub const DEFAULT_WINDOW_W: i32 = 1280;
pub const DEFAULT_WINDOW_H: i32 = 720;
