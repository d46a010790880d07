//! Response types for the booking API.
//!
//! This module defines the listing and error response structures and maps
//! engine errors onto HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::models::{Facility, RateTier};

/// One entry of the `/facilities` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilitySummary {
    /// The facility name.
    pub name: String,
    /// Its rate tiers in evaluation order.
    pub rates: Vec<RateTier>,
    /// How many bookings have been accepted so far.
    pub booking_count: usize,
}

impl From<&Facility> for FacilitySummary {
    fn from(facility: &Facility) -> Self {
        Self {
            name: facility.name().to_string(),
            rates: facility.rates().to_vec(),
            booking_count: facility.bookings().len(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<BookingError> for ApiErrorResponse {
    fn from(error: BookingError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            BookingError::ConfigNotFound { .. }
            | BookingError::ConfigParseError { .. }
            | BookingError::InvalidRateTable { .. }
            | BookingError::DuplicateFacility { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            BookingError::FacilityNotFound { name } => (
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "FACILITY_NOT_FOUND",
                    message,
                    format!("No facility named '{}' is registered", name),
                ),
            ),
            BookingError::InvalidTime { .. } => {
                (StatusCode::BAD_REQUEST, ApiError::new("INVALID_TIME", message))
            }
            BookingError::InvalidInterval { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_INTERVAL",
                    message,
                    "End time must be after start time",
                ),
            ),
            BookingError::SlotConflict { .. } => (
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "SLOT_CONFLICT",
                    message,
                    "Booking failed, time slot already booked",
                ),
            ),
            BookingError::RateGap { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "RATE_GAP",
                    message,
                    "The facility has no rate for part of the requested interval",
                ),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
