//! Core data models for the facility booking engine.
//!
//! This module contains all the domain models used throughout the engine.

mod booking;
mod clock_time;
mod cost;
mod facility;
mod rate_tier;

pub use booking::{Booking, ensure_interval, hours_between, seconds_between};
pub use clock_time::{ClockTime, MINUTES_PER_DAY};
pub use cost::{BookingConfirmation, CostLine, CostQuote};
pub use facility::Facility;
pub use rate_tier::{RateTier, TierWindow};
