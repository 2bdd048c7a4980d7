//! Clip a period's points to the caller's request window.
//!
//! A point is kept iff its position lies strictly after `skip_begin` slots
//! and no later than `point_count - skip_end` slots, where the skips are the
//! (possibly negative, possibly fractional) distances between the period
//! bounds and the window bounds. For an hourly day this is exactly
//! `position > skip_begin && position <= 24 - skip_end`.

use time::Duration;

use crate::document::{Period, Resolution};
use crate::{RequestWindow, UtcDateTime};

/// Inclusion test and timestamping for one period against one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodClip {
    period_start: UtcDateTime,
    resolution: Resolution,
    point_count: u32,
    skip_begin: f64,
    skip_end: f64,
}

impl PeriodClip {
    pub fn new(
        period_start: UtcDateTime,
        period_end: UtcDateTime,
        resolution: Resolution,
        window: &RequestWindow,
    ) -> Self {
        Self {
            period_start,
            resolution,
            point_count: resolution.slots_in(period_end.since(period_start)),
            skip_begin: slots(window.start.since(period_start), resolution),
            skip_end: slots(period_end.since(window.end), resolution),
        }
    }

    pub fn for_period(period: &Period, window: &RequestWindow) -> Self {
        Self::new(period.start(), period.end(), period.resolution(), window)
    }

    /// Slots of the period before the window opens; negative when the
    /// window starts earlier than the period.
    pub const fn skip_begin(&self) -> f64 {
        self.skip_begin
    }

    /// Slots of the period after the window closes; negative when the
    /// window ends later than the period.
    pub const fn skip_end(&self) -> f64 {
        self.skip_end
    }

    pub const fn point_count(&self) -> u32 {
        self.point_count
    }

    pub fn includes(&self, position: u32) -> bool {
        let position = f64::from(position);
        position > self.skip_begin && position <= f64::from(self.point_count) - self.skip_end
    }

    /// `period_start + (position - 1) * resolution`.
    pub fn point_time(&self, position: u32) -> UtcDateTime {
        let offset = i64::from(position.saturating_sub(1)) * i64::from(self.resolution.minutes());
        self.period_start.saturating_add(Duration::minutes(offset))
    }
}

fn slots(span: Duration, resolution: Resolution) -> f64 {
    span.as_seconds_f64() / resolution.duration().as_seconds_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(input: &str) -> UtcDateTime {
        UtcDateTime::parse(input).expect("valid timestamp")
    }

    fn day_clip(window_start: &str, window_end: &str) -> PeriodClip {
        PeriodClip::new(
            ts("2016-01-01T00:00:00Z"),
            ts("2016-01-02T00:00:00Z"),
            Resolution::HOURLY,
            &RequestWindow::new(ts(window_start), ts(window_end)),
        )
    }

    fn included(clip: &PeriodClip) -> Vec<u32> {
        (1..=clip.point_count()).filter(|p| clip.includes(*p)).collect()
    }

    #[test]
    fn clips_day_to_inner_window() {
        let clip = day_clip("2016-01-01T05:00:00Z", "2016-01-01T20:00:00Z");
        assert_eq!(clip.skip_begin(), 5.0);
        assert_eq!(clip.skip_end(), 4.0);
        assert_eq!(included(&clip), (6..=20).collect::<Vec<_>>());
    }

    #[test]
    fn wider_window_keeps_whole_period() {
        let clip = day_clip("2015-12-31T00:00:00Z", "2016-01-03T00:00:00Z");
        assert!(clip.skip_begin() < 0.0);
        assert!(clip.skip_end() < 0.0);
        assert_eq!(included(&clip), (1..=24).collect::<Vec<_>>());
    }

    #[test]
    fn mid_hour_start_keeps_current_hour() {
        let clip = day_clip("2016-01-01T05:30:00Z", "2016-01-01T07:00:00Z");
        assert_eq!(included(&clip), vec![6, 7]);
    }

    #[test]
    fn disjoint_window_keeps_nothing() {
        let clip = day_clip("2016-01-03T00:00:00Z", "2016-01-04T00:00:00Z");
        assert!(included(&clip).is_empty());
    }

    #[test]
    fn timestamps_follow_position() {
        let clip = day_clip("2016-01-01T00:00:00Z", "2016-01-02T00:00:00Z");
        assert_eq!(clip.point_time(1).format_rfc3339(), "2016-01-01T00:00:00Z");
        assert_eq!(clip.point_time(6).format_rfc3339(), "2016-01-01T05:00:00Z");
        assert_eq!(clip.point_time(24).format_rfc3339(), "2016-01-01T23:00:00Z");
    }

    #[test]
    fn quarter_hour_periods_use_their_own_point_count() {
        let clip = PeriodClip::new(
            ts("2025-10-01T22:00:00Z"),
            ts("2025-10-02T22:00:00Z"),
            Resolution::parse("PT15M").expect("valid"),
            &RequestWindow::new(ts("2025-10-02T21:00:00Z"), ts("2025-10-03T00:00:00Z")),
        );
        assert_eq!(clip.point_count(), 96);
        assert_eq!(included(&clip), (93..=96).collect::<Vec<_>>());
        assert_eq!(clip.point_time(93).format_rfc3339(), "2025-10-02T21:00:00Z");
    }

    #[test]
    fn short_dst_day_uses_23_positions() {
        let clip = PeriodClip::new(
            ts("2016-03-26T23:00:00Z"),
            ts("2016-03-27T22:00:00Z"),
            Resolution::HOURLY,
            &RequestWindow::new(ts("2016-03-27T20:00:00Z"), ts("2016-03-28T20:00:00Z")),
        );
        assert_eq!(clip.point_count(), 23);
        assert_eq!(included(&clip), vec![22, 23]);
    }
}
