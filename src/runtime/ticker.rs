/// Periodic wall-clock timer polled from the frame loop.

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone)]
pub struct Ticker {
    period: TimeDelta,
    next_due: Option<DateTime<Utc>>,
}

impl Ticker {
    pub fn new(period_ms: i64) -> Self {
        Self {
            period: TimeDelta::milliseconds(period_ms.max(1)),
            next_due: None,
        }
    }

    /// True on the first poll and then once per period. Missed periods are
    /// not replayed; the next firing is one period after this one.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.next_due {
            Some(due) if now < due => {
                // Clock stepped backwards past a whole period: re-arm from here
                if due - now > self.period {
                    self.next_due = Some(now + self.period);
                }
                false
            }
            _ => {
                self.next_due = Some(now + self.period);
                true
            }
        }
    }
}
