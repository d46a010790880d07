//! Request types for the booking API.
//!
//! This module defines the JSON request body shared by the `/quotes` and
//! `/bookings` endpoints.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BookingResult;
use crate::registry::BookingCoordinator;

/// Request body for the `/quotes` and `/bookings` endpoints.
///
/// The interval is given either as two RFC 3339 instants or, as a booking
/// form would send it, as a date plus two `HH:MM` wall-clock times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// The facility to book.
    pub facility: String,
    /// The requested interval.
    #[serde(flatten)]
    pub interval: RequestedInterval,
}

/// The two accepted ways of describing an interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestedInterval {
    /// Offset-qualified instants.
    Instants {
        /// Start of the interval.
        start: DateTime<FixedOffset>,
        /// End of the interval.
        end: DateTime<FixedOffset>,
    },
    /// A calendar date and two wall-clock times on that date, interpreted in
    /// the registry's configured offset.
    WallClock {
        /// The calendar date.
        date: NaiveDate,
        /// Start time as `HH:MM`.
        start_time: String,
        /// End time as `HH:MM`.
        end_time: String,
    },
}

impl BookingRequest {
    /// Resolves the requested interval into instants.
    pub fn resolve(
        &self,
        coordinator: &BookingCoordinator,
    ) -> BookingResult<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        match &self.interval {
            RequestedInterval::Instants { start, end } => Ok((*start, *end)),
            RequestedInterval::WallClock {
                date,
                start_time,
                end_time,
            } => coordinator.combine(*date, start_time, end_time),
        }
    }
}
