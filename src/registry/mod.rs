//! Facility registry and booking coordination.
//!
//! [`FacilityStore`] owns the facilities and their bookings for the lifetime
//! of the process. [`BookingCoordinator`] is the only writer: it runs the
//! availability check, the pricing and the append as one step per facility.

mod coordinator;
mod store;

pub use coordinator::BookingCoordinator;
pub use store::FacilityStore;
