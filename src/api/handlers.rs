//! HTTP request handlers for the booking API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::BookingRequest;
use super::response::{ApiError, ApiErrorResponse, FacilitySummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/facilities", get(list_facilities_handler))
        .route("/facilities/:name/bookings", get(list_bookings_handler))
        .route("/quotes", post(quote_handler))
        .route("/bookings", post(book_handler))
        .with_state(state)
}

/// Handler for GET /facilities.
async fn list_facilities_handler(State(state): State<AppState>) -> Response {
    let summaries: Vec<FacilitySummary> = state
        .coordinator()
        .facilities()
        .iter()
        .map(FacilitySummary::from)
        .collect();
    json_response(StatusCode::OK, summaries)
}

/// Handler for GET /facilities/{name}/bookings.
async fn list_bookings_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.coordinator().bookings(&name) {
        Ok(bookings) => json_response(StatusCode::OK, bookings),
        Err(err) => {
            warn!(facility = %name, error = %err, "Booking listing failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /quotes.
///
/// Prices the requested interval without booking it.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let coordinator = state.coordinator();
    let result = request
        .resolve(coordinator)
        .and_then(|(start, end)| coordinator.quote(&request.facility, start, end));

    match result {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                facility = %request.facility,
                total = %quote.total,
                "Quote calculated"
            );
            json_response(StatusCode::OK, quote)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Quote failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /bookings.
///
/// Checks availability, prices the interval and records the booking.
async fn book_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let started = Instant::now();
    let coordinator = state.coordinator();
    let result = request
        .resolve(coordinator)
        .and_then(|(start, end)| coordinator.book(&request.facility, start, end));

    match result {
        Ok(confirmation) => {
            info!(
                correlation_id = %correlation_id,
                facility = %request.facility,
                booking_id = %confirmation.booking.id,
                total = %confirmation.quote.total,
                duration_us = started.elapsed().as_micros(),
                "Booking completed successfully"
            );
            json_response(StatusCode::CREATED, confirmation)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Booking failed");
            error_response(err.into())
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of what was wrong.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("did not match any variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
