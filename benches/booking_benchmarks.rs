//! Performance benchmarks for the facility booking engine.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{DateTime, FixedOffset, TimeDelta};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use facility_booking::calculation::{calculate_cost, is_available};
use facility_booking::models::{Facility, RateTier};
use facility_booking::registry::{BookingCoordinator, FacilityStore};

fn base() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-01-12T00:00:00+05:30").unwrap()
}

fn tier(start: &str, end: &str, rate: i64) -> RateTier {
    RateTier::new(start.parse().unwrap(), end.parse().unwrap(), Decimal::from(rate))
}

/// A facility priced by the hour: one tier per hour of the day.
fn hourly_facility() -> Facility {
    let rates = (0..24)
        .map(|hour| {
            let start = format!("{:02}:00", hour);
            let end = format!("{:02}:00", hour + 1);
            tier(&start, &end, 10 + hour)
        })
        .collect();
    Facility::new("Hourly Hall", rates)
}

/// A coordinator whose only facility already holds `count` one-hour bookings.
fn booked_coordinator(count: i64) -> BookingCoordinator {
    let store = FacilityStore::new([Facility::new(
        "Tennis Court",
        vec![tier("00:00", "24:00", 50)],
    )])
    .unwrap();
    let coordinator = BookingCoordinator::new(store, "INR", *base().offset());
    for i in 0..count {
        let start = base() + TimeDelta::hours(2 * i);
        coordinator
            .book("Tennis Court", start, start + TimeDelta::hours(1))
            .expect("bookings are disjoint");
    }
    coordinator
}

fn bench_calculate_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_cost");
    let facility = hourly_facility();

    for days in [1i64, 7, 30] {
        let end = base() + TimeDelta::days(days);
        group.bench_with_input(BenchmarkId::new("hourly_tiers_days", days), &end, |b, end| {
            b.iter(|| calculate_cost(black_box(&facility), black_box(base()), black_box(*end)))
        });
    }

    group.finish();
}

fn bench_is_available(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_available");

    for count in [10i64, 100, 1000] {
        let coordinator = booked_coordinator(count);
        let facility = coordinator.store().snapshot("Tennis Court").unwrap();
        // Falls in the last free gap, so every booking is inspected.
        let start = base() + TimeDelta::hours(2 * count - 1);
        let end = start + TimeDelta::hours(1);
        group.bench_with_input(BenchmarkId::new("bookings", count), &facility, |b, facility| {
            b.iter(|| is_available(black_box(facility), black_box(start), black_box(end)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_cost, bench_is_available);
criterion_main!(benches);
