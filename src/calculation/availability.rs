//! Availability checking.
//!
//! Decides whether a requested interval collides with any booking already
//! accepted for a facility. Both functions are pure reads.

use chrono::{DateTime, FixedOffset};

use crate::models::{Booking, Facility};

/// Returns the first existing booking that intersects `[start, end)`.
///
/// Bookings that merely touch the requested interval are not conflicts, so
/// back-to-back reservations are allowed.
///
/// # Example
///
/// ```
/// use facility_booking::calculation::find_conflict;
/// use facility_booking::models::Facility;
/// use chrono::DateTime;
///
/// let facility = Facility::new("Tennis Court", vec![]);
/// let start = DateTime::parse_from_rfc3339("2026-01-15T10:00:00+05:30").unwrap();
/// let end = DateTime::parse_from_rfc3339("2026-01-15T12:00:00+05:30").unwrap();
/// assert!(find_conflict(&facility, start, end).is_none());
/// ```
pub fn find_conflict(
    facility: &Facility,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> Option<&Booking> {
    facility
        .bookings()
        .iter()
        .find(|booking| booking.overlaps(start, end))
}

/// Returns `true` when no existing booking of `facility` intersects `[start, end)`.
pub fn is_available(
    facility: &Facility,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> bool {
    find_conflict(facility, start, end).is_none()
}
