//! Facility Booking Engine
//!
//! This crate reserves time intervals on shared facilities and prices them with
//! time-of-day tiered rates, including tiers that wrap past midnight.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
