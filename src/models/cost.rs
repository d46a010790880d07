//! Cost quote models.
//!
//! A [`CostQuote`] is the priced breakdown of one interval on one facility.
//! Each billed segment becomes a [`CostLine`] naming the tier that priced it.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Booking, ClockTime};

/// One contiguous segment of an interval billed at a single tier.
///
/// # Example
///
/// ```
/// use facility_booking::models::CostLine;
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let line = CostLine {
///     tier_index: 0,
///     tier_start: "10:00".parse().unwrap(),
///     tier_end: "16:00".parse().unwrap(),
///     start: DateTime::parse_from_rfc3339("2026-01-15T10:00:00+05:30").unwrap(),
///     end: DateTime::parse_from_rfc3339("2026-01-15T16:00:00+05:30").unwrap(),
///     hours: Decimal::from(6),
///     rate: Decimal::from(100),
///     amount: Decimal::from(600),
/// };
/// assert_eq!(line.amount, line.hours * line.rate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// Position of the pricing tier in the facility's rate table.
    pub tier_index: usize,
    /// Wall-clock start of the pricing tier.
    pub tier_start: ClockTime,
    /// Wall-clock end of the pricing tier.
    pub tier_end: ClockTime,
    /// Start of the billed segment.
    pub start: DateTime<FixedOffset>,
    /// End of the billed segment.
    pub end: DateTime<FixedOffset>,
    /// Billed hours.
    pub hours: Decimal,
    /// Hourly rate of the tier.
    pub rate: Decimal,
    /// Amount charged for this segment.
    pub amount: Decimal,
}

/// The priced breakdown of an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostQuote {
    /// The facility being priced.
    pub facility: String,
    /// Start of the priced interval.
    pub start: DateTime<FixedOffset>,
    /// End of the priced interval.
    pub end: DateTime<FixedOffset>,
    /// Total billed hours.
    pub hours: Decimal,
    /// Billed segments in chronological order.
    pub lines: Vec<CostLine>,
    /// Sum of all line amounts.
    pub total: Decimal,
}

/// The result of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// The booking that was recorded.
    pub booking: Booking,
    /// Its price.
    pub quote: CostQuote,
    /// Currency code the amounts are expressed in.
    pub currency: String,
}
