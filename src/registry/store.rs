//! In-memory facility store.
//!
//! The set of facilities is fixed when the store is built; only their booking
//! lists change afterwards. Each facility sits behind its own lock so work on
//! one facility never waits for another.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::error::{BookingError, BookingResult};
use crate::models::Facility;

/// Owns every facility for the lifetime of the process.
#[derive(Debug)]
pub struct FacilityStore {
    facilities: BTreeMap<String, Mutex<Facility>>,
}

impl FacilityStore {
    /// Builds a store, rejecting duplicate facility names.
    pub fn new(facilities: impl IntoIterator<Item = Facility>) -> BookingResult<Self> {
        let mut map = BTreeMap::new();
        for facility in facilities {
            let name = facility.name().to_string();
            if map.contains_key(&name) {
                return Err(BookingError::DuplicateFacility { name });
            }
            map.insert(name, Mutex::new(facility));
        }
        Ok(Self { facilities: map })
    }

    /// Facility names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.facilities.keys().cloned().collect()
    }

    /// Whether a facility with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.facilities.contains_key(name)
    }

    /// Runs `f` with shared access to the named facility while holding its lock.
    pub fn with_facility<T>(&self, name: &str, f: impl FnOnce(&Facility) -> T) -> BookingResult<T> {
        let facility = self.lookup(name)?.lock();
        Ok(f(&facility))
    }

    /// Runs `f` with exclusive access to the named facility while holding its lock.
    pub fn with_facility_mut<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Facility) -> T,
    ) -> BookingResult<T> {
        let mut facility = self.lookup(name)?.lock();
        Ok(f(&mut facility))
    }

    /// Returns a copy of the named facility as it is right now.
    pub fn snapshot(&self, name: &str) -> BookingResult<Facility> {
        self.with_facility(name, Facility::clone)
    }

    /// Returns copies of every facility in name order.
    pub fn snapshots(&self) -> Vec<Facility> {
        self.facilities
            .values()
            .map(|facility| facility.lock().clone())
            .collect()
    }

    fn lookup(&self, name: &str) -> BookingResult<&Mutex<Facility>> {
        self.facilities
            .get(name)
            .ok_or_else(|| BookingError::FacilityNotFound {
                name: name.to_string(),
            })
    }
}
