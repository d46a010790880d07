//! Application state for the booking API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::registry::BookingCoordinator;

/// Shared application state.
///
/// Holds the booking coordinator, which owns the facility store for the
/// lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    coordinator: Arc<BookingCoordinator>,
}

impl AppState {
    /// Creates a new application state around the given coordinator.
    pub fn new(coordinator: BookingCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }

    /// Returns a reference to the booking coordinator.
    pub fn coordinator(&self) -> &BookingCoordinator {
        &self.coordinator
    }
}
