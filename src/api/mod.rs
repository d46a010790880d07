//! HTTP API module for the facility booking engine.
//!
//! This module provides the REST endpoints for listing facilities and
//! bookings, quoting an interval and booking it.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BookingRequest, RequestedInterval};
pub use response::{ApiError, ApiErrorResponse, FacilitySummary};
pub use state::AppState;
