//! Cost calculation across time-of-day rate tiers.
//!
//! The calculator walks a cursor from the start of the requested interval to
//! its end. On every pass it looks for the first tier (in table order) whose
//! calendar placement contains the cursor, bills the time until that tier
//! closes or the interval ends, and moves the cursor forward. Tiers are
//! re-anchored to the cursor's calendar date on each pass, so intervals that
//! cross midnight, possibly several times, are billed day by day.
//!
//! Only when no tier placed on the cursor's date matches are wrapping tiers
//! that opened the previous evening considered.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{BookingError, BookingResult};
use crate::models::{
    CostLine, CostQuote, Facility, RateTier, TierWindow, ensure_interval, hours_between,
    seconds_between,
};

/// Seconds in an hour, used to turn segment durations into billable hours.
const SECONDS_PER_HOUR: i64 = 3600;

/// Calculates the cost of reserving `facility` for `[start, end)`.
///
/// All wall-clock arithmetic happens in the UTC offset of `start`; `end` is
/// converted to that offset first.
///
/// # Errors
///
/// - [`BookingError::InvalidInterval`] when `start >= end`.
/// - [`BookingError::RateGap`] when no tier covers some instant of the
///   interval. Nothing is billed in that case: the interval is either priced
///   completely or not at all.
///
/// # Example
///
/// ```
/// use facility_booking::calculation::calculate_cost;
/// use facility_booking::models::{Facility, RateTier};
/// use chrono::DateTime;
/// use rust_decimal::Decimal;
///
/// let clubhouse = Facility::new(
///     "Clubhouse",
///     vec![
///         RateTier::new("10:00".parse().unwrap(), "16:00".parse().unwrap(), Decimal::from(100)),
///         RateTier::new("16:00".parse().unwrap(), "22:00".parse().unwrap(), Decimal::from(500)),
///     ],
/// );
///
/// let quote = calculate_cost(
///     &clubhouse,
///     DateTime::parse_from_rfc3339("2026-01-15T10:00:00+05:30").unwrap(),
///     DateTime::parse_from_rfc3339("2026-01-15T18:00:00+05:30").unwrap(),
/// )
/// .unwrap();
///
/// // 6h at 100 plus 2h at 500
/// assert_eq!(quote.total, Decimal::from(1600));
/// assert_eq!(quote.lines.len(), 2);
/// ```
pub fn calculate_cost(
    facility: &Facility,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> BookingResult<CostQuote> {
    ensure_interval(start, end)?;

    let end = end.with_timezone(start.offset());
    let mut current = start;
    let mut lines = Vec::new();
    let mut total = Decimal::ZERO;

    while current < end {
        let Some((tier_index, tier, window)) = find_tier(facility.rates(), current) else {
            warn!(
                facility = %facility.name(),
                at = %current,
                billed = %total,
                "No rate tier covers instant"
            );
            return Err(BookingError::RateGap {
                facility: facility.name().to_string(),
                at: current,
            });
        };

        let segment_end = end.min(window.end);
        let line = bill_segment(tier_index, tier, current, segment_end);
        debug!(
            facility = %facility.name(),
            tier_index,
            start = %line.start,
            end = %line.end,
            amount = %line.amount,
            "Billed segment"
        );

        total += line.amount;
        current = segment_end;
        lines.push(line);
    }

    Ok(CostQuote {
        facility: facility.name().to_string(),
        start,
        end,
        hours: hours_between(start, end),
        lines,
        total,
    })
}

/// Finds the first tier, in table order, whose placement on the date of
/// `instant` contains it, falling back to wrapping tiers carried over from the
/// previous day.
fn find_tier(
    rates: &[RateTier],
    instant: DateTime<FixedOffset>,
) -> Option<(usize, &RateTier, TierWindow)> {
    let first_match = |place: fn(&RateTier, DateTime<FixedOffset>) -> Option<TierWindow>| {
        rates
            .iter()
            .enumerate()
            .find_map(|(index, tier)| place(tier, instant).map(|window| (index, tier, window)))
    };

    first_match(RateTier::window_containing).or_else(|| first_match(RateTier::carried_over_window))
}

fn bill_segment(
    tier_index: usize,
    tier: &RateTier,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> CostLine {
    let seconds = seconds_between(start, end);
    // Multiply before dividing so thirds of an hour do not lose precision.
    let amount = tier.rate * seconds / Decimal::from(SECONDS_PER_HOUR);

    CostLine {
        tier_index,
        tier_start: tier.start,
        tier_end: tier.end,
        start,
        end,
        hours: hours_between(start, end),
        rate: tier.rate,
        amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn tier(start: &str, end: &str, rate: &str) -> RateTier {
        RateTier::new(start.parse().unwrap(), end.parse().unwrap(), dec(rate))
    }

    fn clubhouse() -> Facility {
        Facility::new(
            "Clubhouse",
            vec![tier("10:00", "16:00", "100"), tier("16:00", "22:00", "500")],
        )
    }

    fn tennis_court() -> Facility {
        Facility::new("Tennis Court", vec![tier("00:00", "24:00", "50")])
    }

    fn day_and_night() -> Facility {
        Facility::new(
            "Hall",
            vec![tier("06:00", "22:00", "100"), tier("22:00", "06:00", "40")],
        )
    }

    #[test]
    fn test_single_tier_cost_is_rate_times_hours() {
        let quote = calculate_cost(
            &clubhouse(),
            instant("2026-01-15T11:00:00+05:30"),
            instant("2026-01-15T14:00:00+05:30"),
        )
        .unwrap();

        assert_eq!(quote.total, dec("300"));
        assert_eq!(quote.hours, dec("3"));
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].tier_index, 0);
    }

    #[test]
    fn test_multi_tier_split() {
        let quote = calculate_cost(
            &clubhouse(),
            instant("2026-01-15T10:00:00+05:30"),
            instant("2026-01-15T18:00:00+05:30"),
        )
        .unwrap();

        assert_eq!(quote.total, dec("1600"));
        assert_eq!(quote.lines.len(), 2);
        assert_eq!(quote.lines[0].hours, dec("6"));
        assert_eq!(quote.lines[0].amount, dec("600"));
        assert_eq!(quote.lines[1].hours, dec("2"));
        assert_eq!(quote.lines[1].amount, dec("1000"));
        assert_eq!(quote.lines[1].start, instant("2026-01-15T16:00:00+05:30"));
    }

    #[test]
    fn test_tennis_court_full_day_tier() {
        let quote = calculate_cost(
            &tennis_court(),
            instant("2026-01-15T09:00:00+05:30"),
            instant("2026-01-15T11:30:00+05:30"),
        )
        .unwrap();

        assert_eq!(quote.total, dec("125"));
    }

    #[test]
    fn test_overnight_tier_crossing_midnight() {
        let quote = calculate_cost(
            &day_and_night(),
            instant("2026-01-15T23:00:00+05:30"),
            instant("2026-01-16T01:00:00+05:30"),
        )
        .unwrap();

        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].hours, dec("2"));
        assert_eq!(quote.total, dec("80"));
    }

    #[test]
    fn test_overnight_tier_starting_after_midnight() {
        let quote = calculate_cost(
            &day_and_night(),
            instant("2026-01-16T01:00:00+05:30"),
            instant("2026-01-16T08:00:00+05:30"),
        )
        .unwrap();

        // 01:00-06:00 at 40, 06:00-08:00 at 100
        assert_eq!(quote.lines.len(), 2);
        assert_eq!(quote.lines[0].tier_index, 1);
        assert_eq!(quote.lines[0].amount, dec("200"));
        assert_eq!(quote.lines[1].tier_index, 0);
        assert_eq!(quote.total, dec("400"));
    }

    #[test]
    fn test_multi_day_booking_is_billed_day_by_day() {
        let quote = calculate_cost(
            &tennis_court(),
            instant("2026-01-15T20:00:00+05:30"),
            instant("2026-01-17T04:00:00+05:30"),
        )
        .unwrap();

        // 4h + 24h + 4h
        assert_eq!(quote.lines.len(), 3);
        assert_eq!(quote.lines[0].hours, dec("4"));
        assert_eq!(quote.lines[1].hours, dec("24"));
        assert_eq!(quote.lines[2].hours, dec("4"));
        assert_eq!(quote.total, dec("1600"));
    }

    #[test]
    fn test_fractional_hours() {
        let quote = calculate_cost(
            &clubhouse(),
            instant("2026-01-15T10:00:00+05:30"),
            instant("2026-01-15T10:20:00+05:30"),
        )
        .unwrap();

        // 100 * 1200s / 3600s
        assert_eq!(quote.total.round_dp(2), dec("33.33"));
    }

    #[test]
    fn test_end_in_other_offset_is_converted() {
        let quote = calculate_cost(
            &clubhouse(),
            instant("2026-01-15T15:00:00+05:30"),
            // 17:00 in +05:30
            instant("2026-01-15T11:30:00+00:00"),
        )
        .unwrap();

        assert_eq!(quote.end, instant("2026-01-15T17:00:00+05:30"));
        assert_eq!(quote.total, dec("600"));
    }

    #[test]
    fn test_rate_gap_is_reported() {
        let result = calculate_cost(
            &clubhouse(),
            instant("2026-01-15T20:00:00+05:30"),
            instant("2026-01-15T23:00:00+05:30"),
        );

        match result {
            Err(BookingError::RateGap { facility, at }) => {
                assert_eq!(facility, "Clubhouse");
                assert_eq!(at, instant("2026-01-15T22:00:00+05:30"));
            }
            other => panic!("Expected RateGap, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_before_first_tier_is_reported() {
        let result = calculate_cost(
            &clubhouse(),
            instant("2026-01-15T08:00:00+05:30"),
            instant("2026-01-15T11:00:00+05:30"),
        );
        assert!(matches!(result, Err(BookingError::RateGap { .. })));
    }

    #[test]
    fn test_empty_rate_table_is_a_gap() {
        let facility = Facility::new("Empty", vec![]);
        let result = calculate_cost(
            &facility,
            instant("2026-01-15T10:00:00+05:30"),
            instant("2026-01-15T11:00:00+05:30"),
        );
        assert!(matches!(result, Err(BookingError::RateGap { .. })));
    }

    #[test]
    fn test_first_matching_tier_wins() {
        let facility = Facility::new(
            "Overlapping",
            vec![tier("00:00", "24:00", "10"), tier("10:00", "12:00", "999")],
        );
        let quote = calculate_cost(
            &facility,
            instant("2026-01-15T10:00:00+05:30"),
            instant("2026-01-15T12:00:00+05:30"),
        )
        .unwrap();
        assert_eq!(quote.total, dec("20"));
    }

    #[test]
    fn test_unsorted_tiers() {
        let facility = Facility::new(
            "Unsorted",
            vec![
                tier("18:00", "06:00", "30"),
                tier("12:00", "18:00", "20"),
                tier("06:00", "12:00", "10"),
            ],
        );
        let quote = calculate_cost(
            &facility,
            instant("2026-01-15T05:00:00+05:30"),
            instant("2026-01-15T19:00:00+05:30"),
        )
        .unwrap();

        // 1h*30 + 6h*10 + 6h*20 + 1h*30
        assert_eq!(quote.total, dec("240"));
        assert_eq!(
            quote.lines.iter().map(|l| l.tier_index).collect::<Vec<_>>(),
            vec![0, 2, 1, 0]
        );
    }

    #[test]
    fn test_zero_rate_tier_bills_nothing() {
        let facility = Facility::new("Free", vec![tier("00:00", "24:00", "0")]);
        let quote = calculate_cost(
            &facility,
            instant("2026-01-15T10:00:00+05:30"),
            instant("2026-01-15T12:00:00+05:30"),
        )
        .unwrap();
        assert_eq!(quote.total, Decimal::ZERO);
        assert_eq!(quote.lines.len(), 1);
    }

    #[test]
    fn test_same_day_tier_beats_earlier_carried_over_tier() {
        let facility = Facility::new(
            "Overlapping",
            vec![tier("22:00", "06:00", "40"), tier("00:00", "24:00", "50")],
        );
        let quote = calculate_cost(
            &facility,
            instant("2026-01-16T01:00:00+05:30"),
            instant("2026-01-16T02:00:00+05:30"),
        )
        .unwrap();

        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].tier_index, 1);
        assert_eq!(quote.total, dec("50"));
    }

    #[test]
    fn test_sub_second_durations_are_billed() {
        let facility = Facility::new("Meter", vec![tier("00:00", "24:00", "3600")]);
        let quote = calculate_cost(
            &facility,
            instant("2026-01-15T01:00:00+05:30"),
            instant("2026-01-15T01:00:00.5+05:30"),
        )
        .unwrap();

        assert_eq!(quote.total, dec("0.5"));
        assert_eq!(quote.lines[0].amount, dec("0.5"));
        assert!(quote.hours > Decimal::ZERO);
    }

    #[test]
    fn test_invalid_interval_is_rejected() {
        let at = instant("2026-01-15T10:00:00+05:30");
        assert!(matches!(
            calculate_cost(&tennis_court(), at, at),
            Err(BookingError::InvalidInterval { .. })
        ));
    }
}
