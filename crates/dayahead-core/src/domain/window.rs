use time::Duration;

use crate::UtcDateTime;

/// Caller-requested `[start, end)` window. A window with `start >= end` is
/// valid and simply selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestWindow {
    pub start: UtcDateTime,
    pub end: UtcDateTime,
}

impl RequestWindow {
    pub const fn new(start: UtcDateTime, end: UtcDateTime) -> Self {
        Self { start, end }
    }

    /// `[now, now + hours)`.
    pub fn lookahead(now: UtcDateTime, hours: u32) -> Self {
        Self::new(now, now.saturating_add(Duration::hours(i64::from(hours))))
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Bounds as sent upstream: the API only accepts full hours.
    pub fn truncated_to_hour(&self) -> Self {
        Self::new(self.start.truncate_to_hour(), self.end.truncate_to_hour())
    }
}
