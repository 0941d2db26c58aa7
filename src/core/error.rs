/// Error types for configuration, navigation and the platform layer.

use thiserror::Error;

/// Invalid schedule or starfield configuration, rejected at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("total node count must be greater than zero")]
    NoNodes,

    #[error("unlock interval must be positive, got {0} ms")]
    NonPositiveInterval(i64),

    #[error("invalid interval '{0}': expected e.g. 2h, 90m, 1h30m, 45s or a millisecond count")]
    InvalidInterval(String),

    #[error("{total_nodes} chapters every {interval_ms} ms run past the supported date range")]
    ScheduleOutOfRange { total_nodes: usize, interval_ms: i64 },

    #[error("link template '{0}' does not contain the {{n}} placeholder")]
    MissingPlaceholder(String),
}

/// Failure to hand a chapter link to the desktop.
#[derive(Error, Debug)]
pub enum NavigateError {
    #[error("failed to launch {opener} for {target}: {source}")]
    Spawn {
        opener: String,
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{opener} exited with {status} for {target}")]
    OpenerFailed {
        opener: String,
        target: String,
        status: std::process::ExitStatus,
    },
}

/// Failure to open a node on the chapter path.
#[derive(Error, Debug)]
pub enum OpenError {
    #[error("no chapter node at index {index} (path has {total})")]
    NoSuchNode { index: usize, total: usize },

    #[error(transparent)]
    Navigation(#[from] NavigateError),
}

/// Window system failures.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("failed to open X11 display")]
    NoDisplay,

    #[error("window title contains an interior NUL byte")]
    InvalidTitle,

    #[error("failed to create Cairo context for the window")]
    CairoContext,
}
