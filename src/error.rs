//! Error types for the facility booking engine.
//!
//! Every failure the engine can report is a value of [`BookingError`]; none of
//! them is fatal and the caller decides how to surface it.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// The main error type for the booking engine.
///
/// # Example
///
/// ```
/// use facility_booking::error::BookingError;
///
/// let error = BookingError::FacilityNotFound {
///     name: "Pool".to_string(),
/// };
/// assert_eq!(error.to_string(), "Facility not found: Pool");
/// ```
#[derive(Debug, Error)]
pub enum BookingError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A facility's rate table is malformed.
    #[error("Invalid rate table for facility '{facility}': {message}")]
    InvalidRateTable {
        /// The facility owning the rate table.
        facility: String,
        /// What made the table invalid.
        message: String,
    },

    /// Two facilities were configured with the same name.
    #[error("Duplicate facility: {name}")]
    DuplicateFacility {
        /// The repeated name.
        name: String,
    },

    /// A wall-clock time, date or offset could not be understood.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// The referenced facility is not in the registry.
    #[error("Facility not found: {name}")]
    FacilityNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The requested interval does not end after it starts.
    #[error("Invalid interval: end {end} must be after start {start}")]
    InvalidInterval {
        /// Requested start.
        start: DateTime<FixedOffset>,
        /// Requested end.
        end: DateTime<FixedOffset>,
    },

    /// The requested interval intersects an existing booking.
    #[error("Time slot already booked at '{facility}': {start} - {end}")]
    SlotConflict {
        /// The facility that was requested.
        facility: String,
        /// Start of the existing booking in the way.
        start: DateTime<FixedOffset>,
        /// End of the existing booking in the way.
        end: DateTime<FixedOffset>,
    },

    /// No rate tier covers part of the requested interval.
    #[error("No rate tier of facility '{facility}' covers {at}")]
    RateGap {
        /// The facility being priced.
        facility: String,
        /// The first instant no tier covers.
        at: DateTime<FixedOffset>,
    },
}

/// A type alias for Results that return BookingError.
pub type BookingResult<T> = Result<T, BookingError>;
