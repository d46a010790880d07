//! Facility model.

use serde::{Deserialize, Serialize};

use super::{Booking, RateTier};

/// A bookable facility with its rate table and the bookings accepted so far.
///
/// Bookings are append-only. Only the booking coordinator appends, after the
/// availability check has passed under the facility lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    name: String,
    rates: Vec<RateTier>,
    #[serde(default)]
    bookings: Vec<Booking>,
}

impl Facility {
    /// Creates a facility with no bookings.
    pub fn new(name: impl Into<String>, rates: Vec<RateTier>) -> Self {
        Self {
            name: name.into(),
            rates,
            bookings: Vec::new(),
        }
    }

    /// The unique facility name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rate table in configuration order.
    pub fn rates(&self) -> &[RateTier] {
        &self.rates
    }

    /// Accepted bookings in acceptance order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub(crate) fn push_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }
}
