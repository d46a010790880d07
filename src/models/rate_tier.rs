//! Rate tier model.
//!
//! A rate tier prices every hour that falls between two wall-clock times.
//! Tiers whose end is not after their start run into the next calendar day.

use chrono::{DateTime, Days, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// An hourly rate applying between two wall-clock times.
///
/// # Example
///
/// ```
/// use facility_booking::models::RateTier;
/// use rust_decimal::Decimal;
///
/// let night = RateTier::new("22:00".parse().unwrap(), "06:00".parse().unwrap(), Decimal::from(80));
/// assert!(night.wraps_midnight());
/// assert_eq!(night.length_minutes(), 8 * 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// When the tier starts each day.
    pub start: ClockTime,
    /// When the tier ends; `24:00` or a time not after `start` means the next day.
    pub end: ClockTime,
    /// Cost per hour.
    pub rate: Decimal,
}

/// A tier placed on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierWindow {
    /// Instant the tier opens.
    pub start: DateTime<FixedOffset>,
    /// Instant the tier closes (exclusive).
    pub end: DateTime<FixedOffset>,
}

impl TierWindow {
    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl RateTier {
    /// Creates a new rate tier.
    pub fn new(start: ClockTime, end: ClockTime, rate: Decimal) -> Self {
        Self { start, end, rate }
    }

    /// Whether the tier closes on the day after it opens.
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start || self.end.is_end_of_day()
    }

    /// Length of the tier in minutes, between 1 and 1440.
    ///
    /// A tier whose start equals its end covers the whole day.
    pub fn length_minutes(&self) -> u16 {
        let start = self.start.minutes();
        let end = self.end.minutes();
        if end > start {
            end - start
        } else {
            end + ClockTime::END_OF_DAY.minutes() - start
        }
    }

    /// Anchors the tier on `date`: it opens at `start` on that date and closes
    /// at `end` on the same date, or on the next day when `end <= start`.
    pub fn window_on(&self, date: NaiveDate, offset: FixedOffset) -> Option<TierWindow> {
        let start = self.start.on(date, offset)?;
        let mut end = self.end.on(date, offset)?;
        if end <= start {
            end = self.end.on_next_day(date, offset)?;
        }
        Some(TierWindow { start, end })
    }

    /// The placement of this tier anchored on the calendar date of `instant`,
    /// if it contains `instant`.
    pub fn window_containing(&self, instant: DateTime<FixedOffset>) -> Option<TierWindow> {
        self.window_on(instant.date_naive(), *instant.offset())
            .filter(|window| window.contains(instant))
    }

    /// The placement of a midnight-wrapping tier that opened on the day before
    /// `instant` and is still open at `instant`.
    ///
    /// This is how 01:00 is found inside a 22:00-06:00 tier that opened the
    /// evening before. Tiers that do not wrap never carry over.
    pub fn carried_over_window(&self, instant: DateTime<FixedOffset>) -> Option<TierWindow> {
        if !self.wraps_midnight() {
            return None;
        }
        instant
            .date_naive()
            .checked_sub_days(Days::new(1))
            .and_then(|previous| self.window_on(previous, *instant.offset()))
            .filter(|window| window.contains(instant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(start: &str, end: &str, rate: i64) -> RateTier {
        RateTier::new(start.parse().unwrap(), end.parse().unwrap(), Decimal::from(rate))
    }

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    #[test]
    fn test_daytime_tier_does_not_wrap() {
        let day = tier("10:00", "16:00", 100);
        assert!(!day.wraps_midnight());
        assert_eq!(day.length_minutes(), 360);
    }

    #[test]
    fn test_overnight_and_full_day_tiers_wrap() {
        assert!(tier("22:00", "06:00", 80).wraps_midnight());
        assert!(tier("00:00", "24:00", 50).wraps_midnight());
        assert!(tier("06:00", "06:00", 50).wraps_midnight());
        assert_eq!(tier("00:00", "24:00", 50).length_minutes(), 1440);
        assert_eq!(tier("06:00", "06:00", 50).length_minutes(), 1440);
    }

    #[test]
    fn test_window_on_same_day() {
        let window = tier("10:00", "16:00", 100)
            .window_on(date("2026-01-15"), ist())
            .unwrap();
        assert_eq!(window.start, instant("2026-01-15T10:00:00+05:30"));
        assert_eq!(window.end, instant("2026-01-15T16:00:00+05:30"));
    }

    #[test]
    fn test_window_on_overnight_ends_next_day() {
        let window = tier("22:00", "06:00", 80)
            .window_on(date("2026-01-15"), ist())
            .unwrap();
        assert_eq!(window.start, instant("2026-01-15T22:00:00+05:30"));
        assert_eq!(window.end, instant("2026-01-16T06:00:00+05:30"));
    }

    #[test]
    fn test_window_on_end_of_day_sentinel() {
        let window = tier("00:00", "24:00", 50)
            .window_on(date("2026-01-15"), ist())
            .unwrap();
        assert_eq!(window.start, instant("2026-01-15T00:00:00+05:30"));
        assert_eq!(window.end, instant("2026-01-16T00:00:00+05:30"));
    }

    #[test]
    fn test_window_containing_only_uses_same_day() {
        let night = tier("22:00", "06:00", 80);
        assert!(night
            .window_containing(instant("2026-01-16T01:00:00+05:30"))
            .is_none());

        let window = night
            .window_containing(instant("2026-01-16T23:00:00+05:30"))
            .unwrap();
        assert_eq!(window.start, instant("2026-01-16T22:00:00+05:30"));
    }

    #[test]
    fn test_carried_over_window_after_midnight_uses_previous_evening() {
        let window = tier("22:00", "06:00", 80)
            .carried_over_window(instant("2026-01-16T01:00:00+05:30"))
            .unwrap();
        assert_eq!(window.start, instant("2026-01-15T22:00:00+05:30"));
        assert_eq!(window.end, instant("2026-01-16T06:00:00+05:30"));
    }

    #[test]
    fn test_carried_over_window_ignores_daytime_tiers() {
        assert!(tier("10:00", "16:00", 100)
            .carried_over_window(instant("2026-01-16T11:00:00+05:30"))
            .is_none());
        assert!(tier("22:00", "06:00", 80)
            .carried_over_window(instant("2026-01-16T06:00:00+05:30"))
            .is_none());
    }

    #[test]
    fn test_window_containing_before_tier_opens() {
        let night = tier("22:00", "06:00", 80);
        assert!(night
            .window_containing(instant("2026-01-16T12:00:00+05:30"))
            .is_none());
        assert!(night
            .window_containing(instant("2026-01-16T06:00:00+05:30"))
            .is_none());
    }

    #[test]
    fn test_window_follows_instant_offset() {
        let day = tier("10:00", "16:00", 100);

        // 10:30 UTC is 16:00 in +05:30, so the same instant is inside the tier
        // only when read in UTC.
        let utc = day
            .window_containing(instant("2026-01-15T10:30:00+00:00"))
            .unwrap();
        assert_eq!(utc.start, instant("2026-01-15T10:00:00+00:00"));
        assert!(day
            .window_containing(instant("2026-01-15T16:00:00+05:30"))
            .is_none());
    }
}
