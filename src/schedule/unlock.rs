/// Time-gated unlock arithmetic: unlocked count, next boundary and countdown text.
///
/// Everything here is a pure function of `now`; nothing is carried over from a
/// previous evaluation, so a window left open for days (or a clock that jumps)
/// always lands on the right answer at the next refresh.

use crate::core::config;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Milliseconds from `start` to `now`, floored.
fn elapsed_ms(now: DateTime<Utc>, start: DateTime<Utc>) -> i64 {
    now.timestamp_millis() - start.timestamp_millis()
}

/// Number of nodes unlocked at `now`.
///
/// One node is unlocked at `start`, one more at every whole interval after it,
/// never more than `total_nodes`. Instants before `start` clamp to zero.
pub fn compute_unlocked_count(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    interval_ms: i64,
    total_nodes: usize,
) -> usize {
    debug_assert!(interval_ms > 0, "interval must be positive");
    let raw = elapsed_ms(now, start).div_euclid(interval_ms) + 1;
    raw.clamp(0, total_nodes as i64) as usize
}

/// Smallest unlock boundary strictly after `now`.
///
/// Before launch that is `start` itself, the instant the first node opens.
/// `None` when the boundary lies beyond the representable calendar.
pub fn next_unlock_boundary(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    interval_ms: i64,
) -> Option<DateTime<Utc>> {
    debug_assert!(interval_ms > 0, "interval must be positive");
    if now < start {
        return Some(start);
    }
    let k = elapsed_ms(now, start).div_euclid(interval_ms) + 1;
    let offset = k.checked_mul(interval_ms).and_then(TimeDelta::try_milliseconds)?;
    start.checked_add_signed(offset)
}

/// Milliseconds until the next unlock boundary, if there is one.
pub fn remaining_until_next_unlock(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    interval_ms: i64,
) -> Option<i64> {
    next_unlock_boundary(now, start, interval_ms)
        .map(|boundary| boundary.timestamp_millis() - now.timestamp_millis())
}

/// Human-readable countdown to the next unlock.
pub fn compute_countdown_text(now: DateTime<Utc>, start: DateTime<Utc>, interval_ms: i64) -> String {
    // No boundary left to reach means nothing else will ever open
    let Some(remaining) = remaining_until_next_unlock(now, start, interval_ms) else {
        return config::MSG_ALL_UNLOCKED.to_string();
    };
    if remaining <= 0 {
        return config::MSG_UNLOCKING_NOW.to_string();
    }
    format!(
        "{} {}",
        config::MSG_COUNTDOWN_PREFIX,
        Countdown::from_millis(remaining)
    )
}

/// Remaining time split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Seconds are rounded up, so any positive remainder shows at least `0h 0m 1s`.
    pub fn from_millis(ms: i64) -> Self {
        let total_secs = if ms > 0 { (ms + 999) / 1000 } else { 0 };
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs % 3600) / 60,
            seconds: total_secs % 60,
        }
    }
}

#[cfg(test)]
impl Countdown {
    pub fn total_millis(&self) -> i64 {
        (self.hours * 3600 + self.minutes * 60 + self.seconds) * 1000
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use regex::Regex;

    const INTERVAL: i64 = 7_200_000;
    const TOTAL: usize = 20;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 3, 15, 0, 0).unwrap()
    }

    fn at(offset_ms: i64) -> DateTime<Utc> {
        start() + TimeDelta::milliseconds(offset_ms)
    }

    fn count(offset_ms: i64) -> usize {
        compute_unlocked_count(at(offset_ms), start(), INTERVAL, TOTAL)
    }

    fn parse_countdown(text: &str) -> Option<Countdown> {
        let re = Regex::new(r"(\d+)h (\d+)m (\d+)s$").unwrap();
        let caps = re.captures(text)?;
        Some(Countdown {
            hours: caps[1].parse().ok()?,
            minutes: caps[2].parse().ok()?,
            seconds: caps[3].parse().ok()?,
        })
    }

    #[test]
    fn test_launch_scenario() {
        assert_eq!(count(0), 1);
        assert_eq!(count(INTERVAL - 1), 1);
        assert_eq!(count(INTERVAL), 2);
        assert_eq!(count(40 * INTERVAL), 20);

        let text = compute_countdown_text(at(INTERVAL - 1), start(), INTERVAL);
        assert_eq!(text, "Next drop in: 0h 0m 1s");
    }

    #[test]
    fn test_countdown_at_start_is_full_interval() {
        let text = compute_countdown_text(start(), start(), INTERVAL);
        assert_eq!(text, "Next drop in: 2h 0m 0s");
    }

    #[test]
    fn test_before_start_clamps_to_zero() {
        assert_eq!(count(-1), 0);
        assert_eq!(count(-INTERVAL), 0);
        assert_eq!(count(-100 * INTERVAL), 0);
    }

    #[test]
    fn test_countdown_before_start_targets_start() {
        assert_eq!(next_unlock_boundary(at(-90_000), start(), INTERVAL), Some(start()));
        let text = compute_countdown_text(at(-90_000), start(), INTERVAL);
        assert_eq!(text, "Next drop in: 0h 1m 30s");
    }

    #[test]
    fn test_countdown_intervals_before_start_still_targets_start() {
        let three_hours = 3 * 3_600_000;
        assert_eq!(next_unlock_boundary(at(-three_hours), start(), INTERVAL), Some(start()));
        assert_eq!(
            compute_countdown_text(at(-three_hours), start(), INTERVAL),
            "Next drop in: 3h 0m 0s"
        );

        let days_early = at(-10 * 24 * 3_600_000 - 1);
        assert_eq!(remaining_until_next_unlock(days_early, start(), INTERVAL), Some(864_000_001));
    }

    #[test]
    fn test_boundary_past_calendar_end_does_not_panic() {
        let huge = 100_000_000_000 * 3_600_000;
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap();
        assert_eq!(next_unlock_boundary(now, start(), huge), None);
        assert_eq!(remaining_until_next_unlock(now, start(), huge), None);
        assert_eq!(compute_countdown_text(now, start(), huge), config::MSG_ALL_UNLOCKED);
        assert_eq!(next_unlock_boundary(now, start(), i64::MAX), None);
    }

    #[test]
    fn test_sub_millisecond_before_start_is_still_locked() {
        let just_before = start() - TimeDelta::microseconds(500);
        assert_eq!(compute_unlocked_count(just_before, start(), INTERVAL, TOTAL), 0);
        assert_eq!(next_unlock_boundary(just_before, start(), INTERVAL), Some(start()));
    }

    #[test]
    fn test_boundary_is_strictly_after_now() {
        assert_eq!(next_unlock_boundary(at(0), start(), INTERVAL), Some(at(INTERVAL)));
        assert_eq!(next_unlock_boundary(at(INTERVAL), start(), INTERVAL), Some(at(2 * INTERVAL)));
    }

    #[test]
    fn test_countdown_components() {
        let c = Countdown::from_millis(3 * 3_600_000 + 4 * 60_000 + 5_000);
        assert_eq!(c, Countdown { hours: 3, minutes: 4, seconds: 5 });
        assert_eq!(c.to_string(), "3h 4m 5s");
        assert_eq!(Countdown::from_millis(1).to_string(), "0h 0m 1s");
        assert_eq!(Countdown::from_millis(0).total_millis(), 0);
    }

    #[test]
    fn test_unlocking_now_message() {
        assert_eq!(config::MSG_UNLOCKING_NOW, "Next drop unlocking now! ✨");
        // The boundary is strictly after `now`, so the countdown never reads zero.
        for offset in [0, 1, INTERVAL - 1, INTERVAL, 5 * INTERVAL + 17] {
            let text = compute_countdown_text(at(offset), start(), INTERVAL);
            assert_ne!(text, config::MSG_UNLOCKING_NOW);
        }
    }

    proptest! {
        #[test]
        fn prop_count_in_range(offset in -1_000i64 * INTERVAL..1_000 * INTERVAL) {
            prop_assert!(count(offset) <= TOTAL);
        }

        #[test]
        fn prop_closed_form_after_start(offset in 0i64..100 * INTERVAL) {
            let expected = std::cmp::min(TOTAL as i64, offset / INTERVAL + 1) as usize;
            prop_assert_eq!(count(offset), expected);
        }

        #[test]
        fn prop_before_start_never_exceeds_start(offset in -100i64 * INTERVAL..0) {
            prop_assert!(count(offset) <= count(0));
        }

        #[test]
        fn prop_monotonic(a in -50i64 * INTERVAL..50 * INTERVAL, delta in 0i64..10 * INTERVAL) {
            prop_assert!(count(a) <= count(a + delta));
        }

        #[test]
        fn prop_countdown_reconstructs_distance(offset in -50i64 * INTERVAL..50 * INTERVAL) {
            let now = at(offset);
            let text = compute_countdown_text(now, start(), INTERVAL);
            let parsed = parse_countdown(&text).expect("countdown format");
            let exact = remaining_until_next_unlock(now, start(), INTERVAL).unwrap();
            prop_assert!(exact > 0);
            if offset < 0 {
                prop_assert_eq!(exact, -offset);
            } else {
                prop_assert!(exact <= INTERVAL);
            }
            let diff = parsed.total_millis() - exact;
            prop_assert!((0..1000).contains(&diff), "diff {} for exact {}", diff, exact);
        }
    }
}
