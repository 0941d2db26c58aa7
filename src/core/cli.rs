/// Command-line options and their validation into runtime configuration.

use super::config;
use super::error::ConfigError;
use crate::schedule::schedule_config::{IntervalParser, LinkTemplate, ScheduleConfig};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "night-chapters")]
#[command(version)]
#[command(about = "Reveal a path of chapters over time, under a moving night sky")]
pub struct Args {
    /// Number of chapter nodes on the path
    #[arg(long = "nodes", value_name = "N", default_value_t = config::DEFAULT_TOTAL_NODES)]
    pub nodes: usize,

    /// Instant the first chapter unlocks (RFC 3339, UTC)
    #[arg(long = "start", value_name = "INSTANT", default_value = config::DEFAULT_START)]
    pub start: DateTime<Utc>,

    /// Time between unlocks, e.g. 2h, 90m, 1h30m, 45s or milliseconds
    #[arg(long = "interval", value_name = "DURATION", default_value = config::DEFAULT_UNLOCK_INTERVAL)]
    pub interval: String,

    /// Chapter link pattern; {n} is the 1-based chapter number
    #[arg(long = "link-template", value_name = "TEMPLATE", default_value = config::DEFAULT_LINK_TEMPLATE)]
    pub link_template: String,

    /// Directory relative chapter links are resolved against
    #[arg(long = "chapters-root", value_name = "DIR", default_value = ".")]
    pub chapters_root: PathBuf,

    /// Program used to open chapter links
    #[arg(long = "opener", value_name = "PROGRAM", default_value = "xdg-open")]
    pub opener: String,

    /// Number of stars in the sky
    #[arg(long = "stars", value_name = "N", default_value_t = config::DEFAULT_STAR_COUNT)]
    pub stars: usize,

    /// Seed for a reproducible sky
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Initial window width
    #[arg(long = "width", default_value_t = config::DEFAULT_WINDOW_W, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Initial window height
    #[arg(long = "height", default_value_t = config::DEFAULT_WINDOW_H, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,
}

impl Args {
    /// Build the validated schedule; fails fast on a bad interval, node count or template.
    pub fn schedule(&self) -> Result<ScheduleConfig, ConfigError> {
        let interval_ms = IntervalParser::new().parse(&self.interval)?;
        let links = LinkTemplate::new(&self.link_template)?;
        ScheduleConfig::new(self.nodes, self.start, interval_ms, links)
    }
}
