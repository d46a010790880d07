//! Rate table coverage checks.
//!
//! A rate table is laid out on a 24-hour dial with minute resolution. Each
//! minute should be claimed by exactly one tier: a minute claimed twice means
//! table order silently decides the price, a minute claimed by nobody cannot
//! be booked.

use rust_decimal::Decimal;

use crate::error::{BookingError, BookingResult};
use crate::models::{ClockTime, MINUTES_PER_DAY, RateTier};

/// A range of the day no tier covers, from `start` (inclusive) to `end`
/// (exclusive). A gap running through midnight has `end <= start`.
pub type CoverageGap = (ClockTime, ClockTime);

/// Which tier claims each minute of the day, plus every clash found while
/// laying the tiers out.
struct Dial {
    owners: Vec<Option<usize>>,
    clashes: Vec<(usize, usize)>,
}

impl Dial {
    fn lay_out(rates: &[RateTier]) -> Self {
        let day = usize::from(MINUTES_PER_DAY);
        let mut owners = vec![None; day];
        let mut clashes = Vec::new();

        for (index, tier) in rates.iter().enumerate() {
            let start = usize::from(tier.start.minutes());
            for offset in 0..usize::from(tier.length_minutes()) {
                let minute = (start + offset) % day;
                match owners[minute] {
                    None => owners[minute] = Some(index),
                    Some(owner) => {
                        if !clashes.contains(&(owner, index)) {
                            clashes.push((owner, index));
                        }
                    }
                }
            }
        }

        Self { owners, clashes }
    }
}

/// Returns the ranges of the day that no tier covers.
///
/// A gap that runs through midnight is reported once, wrapping around.
///
/// # Example
///
/// ```
/// use facility_booking::calculation::coverage_gaps;
/// use facility_booking::models::RateTier;
/// use rust_decimal::Decimal;
///
/// let rates = vec![
///     RateTier::new("10:00".parse().unwrap(), "16:00".parse().unwrap(), Decimal::from(100)),
///     RateTier::new("16:00".parse().unwrap(), "22:00".parse().unwrap(), Decimal::from(500)),
/// ];
/// let gaps = coverage_gaps(&rates);
/// assert_eq!(gaps.len(), 1);
/// assert_eq!(gaps[0].0.to_string(), "22:00");
/// assert_eq!(gaps[0].1.to_string(), "10:00");
/// ```
pub fn coverage_gaps(rates: &[RateTier]) -> Vec<CoverageGap> {
    let owners = Dial::lay_out(rates).owners;
    let day = owners.len();

    if owners.iter().all(Option::is_none) {
        return vec![(ClockTime::MIDNIGHT, ClockTime::END_OF_DAY)];
    }

    // Start scanning right after a covered minute so a gap through midnight
    // is found in one piece.
    let Some(anchor) = owners.iter().position(Option::is_some) else {
        return Vec::new();
    };

    let mut gaps = Vec::new();
    let mut gap_start: Option<usize> = None;
    for step in 1..=day {
        let minute = (anchor + step) % day;
        match (owners[minute].is_none(), gap_start) {
            (true, None) => gap_start = Some(minute),
            (false, Some(start)) => {
                gaps.push((clock(start), clock(minute)));
                gap_start = None;
            }
            _ => {}
        }
    }

    gaps
}

/// Returns pairs of tier indexes `(earlier, later)` that claim a common minute.
pub fn overlapping_tiers(rates: &[RateTier]) -> Vec<(usize, usize)> {
    Dial::lay_out(rates).clashes
}

/// Validates a facility's rate table and returns its coverage gaps.
///
/// # Errors
///
/// Returns [`BookingError::InvalidRateTable`] when the table is empty, when a
/// tier has a negative rate, when a tier starts at `24:00`, or when two tiers
/// overlap. Gaps are not errors: they are hours in which the facility cannot
/// be booked.
pub fn validate_rate_table(facility: &str, rates: &[RateTier]) -> BookingResult<Vec<CoverageGap>> {
    let invalid = |message: String| BookingError::InvalidRateTable {
        facility: facility.to_string(),
        message,
    };

    if rates.is_empty() {
        return Err(invalid("no rate tiers configured".to_string()));
    }

    for (index, tier) in rates.iter().enumerate() {
        if tier.rate < Decimal::ZERO {
            return Err(invalid(format!(
                "tier {} ({}-{}) has negative rate {}",
                index, tier.start, tier.end, tier.rate
            )));
        }
        if tier.start.is_end_of_day() {
            return Err(invalid(format!("tier {} starts at 24:00", index)));
        }
    }

    if let Some(&(first, second)) = overlapping_tiers(rates).first() {
        return Err(invalid(format!(
            "tiers {} ({}-{}) and {} ({}-{}) overlap",
            first, rates[first].start, rates[first].end, second, rates[second].start, rates[second].end
        )));
    }

    Ok(coverage_gaps(rates))
}

fn clock(minute: usize) -> ClockTime {
    // Dial positions are always below MINUTES_PER_DAY.
    ClockTime::from_minutes(minute as u16).unwrap_or(ClockTime::MIDNIGHT)
}
