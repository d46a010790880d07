//! Wall-clock times used by rate tiers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::BookingError;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day with minute resolution and no date component.
///
/// Stored as minutes since midnight in `0..=1440`. The value `24:00` is the
/// end of the day and is only meaningful as the end of a rate tier.
///
/// # Example
///
/// ```
/// use facility_booking::models::ClockTime;
///
/// let time: ClockTime = "16:30".parse().unwrap();
/// assert_eq!(time.minutes(), 990);
/// assert_eq!(time.to_string(), "16:30");
///
/// let end_of_day: ClockTime = "24:00".parse().unwrap();
/// assert!(end_of_day.is_end_of_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Midnight at the end of the day (`24:00`).
    pub const END_OF_DAY: ClockTime = ClockTime {
        minutes: MINUTES_PER_DAY,
    };

    /// Builds a clock time from hours and minutes, allowing `24:00`.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        let minutes = hour.checked_mul(60)?.checked_add(minute)?;
        (minutes <= MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Builds a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    /// Whether this is the `24:00` sentinel.
    pub fn is_end_of_day(self) -> bool {
        self.minutes == MINUTES_PER_DAY
    }

    /// Places this wall-clock time on `date` in the given offset.
    ///
    /// `24:00` lands on midnight of the following day.
    pub fn on(self, date: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        let naive = date.and_time(NaiveTime::MIN) + TimeDelta::minutes(i64::from(self.minutes));
        naive.and_local_timezone(offset).single()
    }

    /// Same as [`ClockTime::on`] but on the day after `date`.
    pub fn on_next_day(
        self,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> Option<DateTime<FixedOffset>> {
        self.on(date.checked_add_days(Days::new(1))?, offset)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl FromStr for ClockTime {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| BookingError::InvalidTime {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid("expected HH:MM"));
        }
        let hour: u16 = hour.parse().map_err(|_| invalid("hour is not a number"))?;
        let minute: u16 = minute
            .parse()
            .map_err(|_| invalid("minute is not a number"))?;

        Self::from_hm(hour, minute).ok_or_else(|| invalid("must be between 00:00 and 24:00"))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}
