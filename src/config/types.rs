//! Configuration types for the booking engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::models::{Facility, RateTier};

/// Metadata about the facility registry, from `registry.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryMetadata {
    /// Human-readable name of the venue.
    pub name: String,
    /// Currency code all rates are expressed in (e.g., "INR").
    pub currency: String,
    /// Offset used to turn a form date and wall-clock times into instants
    /// (e.g., "+05:30").
    pub utc_offset: String,
}

/// One facility file from the `facilities/` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityConfig {
    /// Unique facility name.
    pub name: String,
    /// Rate tiers in evaluation order.
    pub rates: Vec<RateTier>,
}

impl From<FacilityConfig> for Facility {
    fn from(config: FacilityConfig) -> Self {
        Facility::new(config.name, config.rates)
    }
}

/// The complete registry configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    metadata: RegistryMetadata,
    utc_offset: FixedOffset,
    /// Facilities sorted by name.
    facilities: Vec<FacilityConfig>,
}

impl RegistryConfig {
    /// Creates a new RegistryConfig from its component parts.
    pub fn new(
        metadata: RegistryMetadata,
        utc_offset: FixedOffset,
        facilities: Vec<FacilityConfig>,
    ) -> Self {
        let mut sorted = facilities;
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            metadata,
            utc_offset,
            facilities: sorted,
        }
    }

    /// Returns the registry metadata.
    pub fn registry(&self) -> &RegistryMetadata {
        &self.metadata
    }

    /// Returns the parsed default UTC offset.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Returns all facility configurations.
    pub fn facilities(&self) -> &[FacilityConfig] {
        &self.facilities
    }
}
