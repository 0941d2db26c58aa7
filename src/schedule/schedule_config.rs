/// Validated unlock schedule: node count, start instant, interval and chapter links.

use crate::core::config;
use crate::core::error::ConfigError;
use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;

/// Immutable schedule configuration. Construction is the only place the
/// invariants are checked; every computation downstream relies on them.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    total_nodes: usize,
    start: DateTime<Utc>,
    interval_ms: i64,
    links: LinkTemplate,
}

impl ScheduleConfig {
    pub fn new(
        total_nodes: usize,
        start: DateTime<Utc>,
        interval_ms: i64,
        links: LinkTemplate,
    ) -> Result<Self, ConfigError> {
        if total_nodes == 0 {
            return Err(ConfigError::NoNodes);
        }
        if interval_ms <= 0 {
            return Err(ConfigError::NonPositiveInterval(interval_ms));
        }
        // The boundary after the last unlock must still be a calendar instant
        let span = i64::try_from(total_nodes)
            .ok()
            .and_then(|n| n.checked_mul(interval_ms))
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|offset| start.checked_add_signed(offset));
        if span.is_none() {
            return Err(ConfigError::ScheduleOutOfRange {
                total_nodes,
                interval_ms,
            });
        }
        Ok(Self {
            total_nodes,
            start,
            interval_ms,
            links,
        })
    }

    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }

    /// Destination of the node at `index` (0-based).
    pub fn chapter_link(&self, index: usize) -> String {
        self.links.render(index)
    }

    /// One link per node, in index order.
    pub fn chapter_links(&self) -> Vec<String> {
        (0..self.total_nodes).map(|i| self.chapter_link(i)).collect()
    }
}

/// Chapter link pattern; `{n}` is replaced by the 1-based node index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    pattern: String,
}

impl LinkTemplate {
    const PLACEHOLDER: &'static str = "{n}";

    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        if !pattern.contains(Self::PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(pattern.to_string()));
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn render(&self, index: usize) -> String {
        self.pattern
            .replace(Self::PLACEHOLDER, &(index + 1).to_string())
    }
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self {
            pattern: config::DEFAULT_LINK_TEMPLATE.to_string(),
        }
    }
}

/// Parser for human interval strings such as `2h`, `1h30m`, `45s`, `250ms`
/// or a bare millisecond count.
pub struct IntervalParser {
    units_re: Regex,
    bare_re: Regex,
}

impl IntervalParser {
    pub fn new() -> Self {
        Self {
            units_re: Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?(?:(\d+)ms)?$").unwrap(),
            bare_re: Regex::new(r"^\d+$").unwrap(),
        }
    }

    /// Parse to milliseconds. Zero is returned as-is; positivity is checked
    /// by `ScheduleConfig::new`.
    pub fn parse(&self, input: &str) -> Result<i64, ConfigError> {
        let text = input.trim();
        let invalid = || ConfigError::InvalidInterval(input.to_string());

        if text.is_empty() {
            return Err(invalid());
        }

        if self.bare_re.is_match(text) {
            return text.parse::<i64>().map_err(|_| invalid());
        }

        let caps = self.units_re.captures(text).ok_or_else(invalid)?;
        let mut total: i64 = 0;
        for (group, unit_ms) in [(1, 3_600_000i64), (2, 60_000), (3, 1_000), (4, 1)] {
            if let Some(m) = caps.get(group) {
                let value: i64 = m.as_str().parse().map_err(|_| invalid())?;
                total = value
                    .checked_mul(unit_ms)
                    .and_then(|v| total.checked_add(v))
                    .ok_or_else(invalid)?;
            }
        }

        Ok(total)
    }
}

impl Default for IntervalParser {
    fn default() -> Self {
        Self::new()
    }
}
