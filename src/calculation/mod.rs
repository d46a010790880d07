//! Calculation logic for the facility booking engine.
//!
//! This module contains the availability check that guards every booking,
//! the cost calculator that integrates hourly rates across the tiers an
//! interval spans, and the rate table coverage checks used at configuration
//! load.

mod availability;
mod cost;
mod coverage;

pub use availability::{find_conflict, is_available};
pub use cost::calculate_cost;
pub use coverage::{CoverageGap, coverage_gaps, overlapping_tiers, validate_rate_table};
