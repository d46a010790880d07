//! Booking model.
//!
//! A booking is an immutable reservation of `[start, end)` on one facility.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BookingError, BookingResult};

/// A confirmed reservation of a facility.
///
/// # Example
///
/// ```
/// use facility_booking::models::Booking;
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let booking = Booking::new(
///     DateTime::parse_from_rfc3339("2026-01-15T09:00:00+05:30").unwrap(),
///     DateTime::parse_from_rfc3339("2026-01-15T11:30:00+05:30").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(booking.hours(), Decimal::new(25, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: Uuid,
    /// Start of the reserved interval (inclusive).
    pub start: DateTime<FixedOffset>,
    /// End of the reserved interval (exclusive).
    pub end: DateTime<FixedOffset>,
}

impl Booking {
    /// Creates a booking with a fresh id, rejecting intervals that do not end
    /// after they start.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> BookingResult<Self> {
        ensure_interval(start, end)?;
        Ok(Self {
            id: Uuid::new_v4(),
            start,
            end,
        })
    }

    /// Whether `[start, end)` intersects this booking.
    ///
    /// Intervals that only touch (`end == self.start` or `start == self.end`)
    /// do not overlap.
    pub fn overlaps(&self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> bool {
        !(end <= self.start || start >= self.end)
    }

    /// Length of the booking in hours.
    pub fn hours(&self) -> Decimal {
        hours_between(self.start, self.end)
    }
}

/// Rejects an interval unless `start < end`.
pub fn ensure_interval(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> BookingResult<()> {
    if start >= end {
        return Err(BookingError::InvalidInterval { start, end });
    }
    Ok(())
}

/// Seconds between two instants, keeping the sub-second part.
pub fn seconds_between(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Decimal {
    let elapsed = end - start;
    Decimal::from(elapsed.num_seconds()) + Decimal::new(i64::from(elapsed.subsec_nanos()), 9)
}

/// Fractional hours between two instants, exact to the nanosecond.
pub fn hours_between(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Decimal {
    seconds_between(start, end) / Decimal::from(3600)
}
