//! Booking coordination.
//!
//! The coordinator turns a request for `(facility, start, end)` into either a
//! recorded booking with its price or a rejection. The availability check,
//! the pricing and the append run under the facility's lock, so two callers
//! can never both book overlapping slots on the same facility.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::calculation::{calculate_cost, find_conflict};
use crate::config::ConfigLoader;
use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, BookingConfirmation, CostQuote, Facility, ensure_interval};

use super::FacilityStore;

/// Validates, prices and records bookings against a [`FacilityStore`].
///
/// # Example
///
/// ```
/// use facility_booking::models::{Facility, RateTier};
/// use facility_booking::registry::{BookingCoordinator, FacilityStore};
/// use chrono::{DateTime, FixedOffset};
/// use rust_decimal::Decimal;
///
/// let store = FacilityStore::new([Facility::new(
///     "Tennis Court",
///     vec![RateTier::new("00:00".parse().unwrap(), "24:00".parse().unwrap(), Decimal::from(50))],
/// )])
/// .unwrap();
/// let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
/// let coordinator = BookingCoordinator::new(store, "INR", offset);
///
/// let confirmation = coordinator
///     .book(
///         "Tennis Court",
///         DateTime::parse_from_rfc3339("2026-01-15T09:00:00+05:30").unwrap(),
///         DateTime::parse_from_rfc3339("2026-01-15T11:30:00+05:30").unwrap(),
///     )
///     .unwrap();
/// assert_eq!(confirmation.quote.total, Decimal::from(125));
/// ```
#[derive(Debug)]
pub struct BookingCoordinator {
    store: FacilityStore,
    currency: String,
    utc_offset: FixedOffset,
}

impl BookingCoordinator {
    /// Creates a coordinator over `store`.
    ///
    /// `utc_offset` is only used by [`BookingCoordinator::combine`] to turn a
    /// form date and wall-clock times into instants.
    pub fn new(store: FacilityStore, currency: impl Into<String>, utc_offset: FixedOffset) -> Self {
        Self {
            store,
            currency: currency.into(),
            utc_offset,
        }
    }

    /// Builds a coordinator with fresh facilities from a loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> BookingResult<Self> {
        let store = FacilityStore::new(config.facilities())?;
        Ok(Self::new(
            store,
            config.registry().currency.clone(),
            config.config().utc_offset(),
        ))
    }

    /// The currency code amounts are expressed in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The offset used for form-style dates and times.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// The underlying store.
    pub fn store(&self) -> &FacilityStore {
        &self.store
    }

    /// Books `[start, end)` on the named facility and returns its price.
    ///
    /// Checks run in this order and the first failure is returned:
    /// 1. the facility exists ([`BookingError::FacilityNotFound`]);
    /// 2. `start < end` ([`BookingError::InvalidInterval`]);
    /// 3. no existing booking intersects the interval
    ///    ([`BookingError::SlotConflict`]);
    /// 4. the rate table covers the whole interval ([`BookingError::RateGap`]).
    ///
    /// The facility is only modified when every check passes.
    pub fn book(
        &self,
        name: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> BookingResult<BookingConfirmation> {
        let result = self.store.with_facility_mut(name, |facility| {
            ensure_interval(start, end)?;
            let quote = price_if_free(facility, start, end)?;
            let booking = Booking::new(start, end)?;
            facility.push_booking(booking.clone());
            Ok::<_, BookingError>((booking, quote))
        });

        match result.and_then(|inner| inner) {
            Ok((booking, quote)) => {
                info!(
                    facility = %name,
                    booking_id = %booking.id,
                    start = %booking.start,
                    end = %booking.end,
                    total = %quote.total,
                    "Booking recorded"
                );
                Ok(BookingConfirmation {
                    booking,
                    quote,
                    currency: self.currency.clone(),
                })
            }
            Err(err) => {
                warn!(facility = %name, error = %err, "Booking rejected");
                Err(err)
            }
        }
    }

    /// Prices `[start, end)` on the named facility without booking it.
    pub fn quote(
        &self,
        name: &str,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> BookingResult<CostQuote> {
        self.store
            .with_facility(name, |facility| calculate_cost(facility, start, end))?
    }

    /// Returns the bookings of the named facility in acceptance order.
    pub fn bookings(&self, name: &str) -> BookingResult<Vec<Booking>> {
        self.store
            .with_facility(name, |facility| facility.bookings().to_vec())
    }

    /// Returns a snapshot of every facility in name order.
    pub fn facilities(&self) -> Vec<Facility> {
        self.store.snapshots()
    }

    /// Joins a calendar date and two `HH:MM` wall-clock times into instants in
    /// the configured offset. Both times fall on `date`.
    pub fn combine(
        &self,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
    ) -> BookingResult<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        Ok((
            self.at(date, start_time)?,
            self.at(date, end_time)?,
        ))
    }

    fn at(&self, date: NaiveDate, time: &str) -> BookingResult<DateTime<FixedOffset>> {
        let invalid = |message: &str| BookingError::InvalidTime {
            value: time.to_string(),
            message: message.to_string(),
        };
        let wall_clock =
            NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| invalid("expected HH:MM"))?;
        date.and_time(wall_clock)
            .and_local_timezone(self.utc_offset)
            .single()
            .ok_or_else(|| invalid("not representable in the configured offset"))
    }
}

/// Prices the interval if no existing booking is in the way.
fn price_if_free(
    facility: &Facility,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> BookingResult<CostQuote> {
    if let Some(existing) = find_conflict(facility, start, end) {
        return Err(BookingError::SlotConflict {
            facility: facility.name().to_string(),
            start: existing.start,
            end: existing.end,
        });
    }
    calculate_cost(facility, start, end)
}
